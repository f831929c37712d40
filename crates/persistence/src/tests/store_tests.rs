// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{backends, memory_storage};
use crate::{
    ClientStores, DraftStore, KeyValueStorage, Onboarding, OnboardingStore, Preferences,
    PreferencesStore, Session, SessionStore,
};
use bookit_domain::{Locale, ReviewForm, RoleState, Theme, UserRole};
use std::sync::Arc;

#[test]
fn test_empty_storage_hydrates_defaults() {
    let stores: ClientStores = ClientStores::in_memory().unwrap();

    assert_eq!(stores.session.snapshot(), Session::default());
    assert_eq!(stores.session.role_state().role(), UserRole::Guest);
    assert!(!stores.session.is_authenticated());
    assert_eq!(stores.preferences.snapshot(), Preferences::default());
    assert_eq!(stores.preferences.language(), Locale::En);
    assert_eq!(stores.preferences.theme(), Theme::System);
    assert_eq!(stores.onboarding.snapshot(), Onboarding::default());
}

#[test]
fn test_session_survives_rehydration() {
    for (name, storage) in backends() {
        let store: SessionStore = SessionStore::hydrate(Arc::clone(&storage)).unwrap();
        store
            .sign_in("token-1", RoleState::new(UserRole::User, false, false))
            .unwrap();

        let rehydrated: SessionStore = SessionStore::hydrate(storage).unwrap();

        assert_eq!(rehydrated.token().as_deref(), Some("token-1"), "{name}");
        assert_eq!(rehydrated.role_state().role(), UserRole::User, "{name}");
    }
}

#[test]
fn test_teardown_clears_memory_and_storage() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    let store: SessionStore = SessionStore::hydrate(Arc::clone(&storage)).unwrap();
    store
        .sign_in("token-1", RoleState::new(UserRole::Creator, true, false))
        .unwrap();

    store.teardown().unwrap();

    assert_eq!(store.token(), None);
    assert_eq!(store.role_state(), RoleState::guest());
    assert_eq!(SessionStore::hydrate(storage).unwrap().token(), None);
}

#[test]
fn test_reconcile_persists_server_role() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    let store: SessionStore = SessionStore::hydrate(Arc::clone(&storage)).unwrap();
    store
        .sign_in("token-1", RoleState::new(UserRole::User, false, false))
        .unwrap();

    assert!(store.reconcile(UserRole::Creator, true).unwrap());
    assert!(!store.reconcile(UserRole::Creator, true).unwrap());

    let rehydrated: SessionStore = SessionStore::hydrate(storage).unwrap();
    assert_eq!(rehydrated.role_state().role(), UserRole::Creator);
    assert!(rehydrated.role_state().has_brand());
}

#[test]
fn test_unreadable_role_hydrates_to_guest() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    storage.set_item("bookit.session.token", "token-1").unwrap();
    storage.set_item("bookit.session.role", "garbage").unwrap();

    let store: SessionStore = SessionStore::hydrate(storage).unwrap();

    assert_eq!(store.token().as_deref(), Some("token-1"));
    assert_eq!(store.role_state(), RoleState::guest());
}

#[test]
fn test_preferences_persist_as_plain_strings() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    let store: PreferencesStore = PreferencesStore::hydrate(Arc::clone(&storage)).unwrap();

    store.set_language(Locale::Uz).unwrap();
    store.set_theme(Theme::Dark).unwrap();

    assert_eq!(
        storage
            .get_item("bookit.preferences.language")
            .unwrap()
            .as_deref(),
        Some("uz")
    );
    let rehydrated: PreferencesStore = PreferencesStore::hydrate(storage).unwrap();
    assert_eq!(rehydrated.language(), Locale::Uz);
    assert_eq!(rehydrated.theme(), Theme::Dark);
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    storage.set_item("bookit.preferences.language", "fr").unwrap();

    let store: PreferencesStore = PreferencesStore::hydrate(storage).unwrap();

    assert_eq!(store.language(), Locale::En);
}

#[test]
fn test_onboarding_flags_round_trip_through_storage() {
    let storage: Arc<dyn KeyValueStorage> = memory_storage();
    let store: OnboardingStore = OnboardingStore::hydrate(Arc::clone(&storage)).unwrap();

    store.select_category(Some(String::from("barber"))).unwrap();
    store.mark_seen().unwrap();

    let rehydrated: OnboardingStore = OnboardingStore::hydrate(Arc::clone(&storage)).unwrap();
    assert!(rehydrated.has_seen());
    assert_eq!(rehydrated.selected_category().as_deref(), Some("barber"));

    rehydrated.reset().unwrap();
    assert!(!OnboardingStore::hydrate(storage).unwrap().has_seen());
}

#[test]
fn test_drafts_are_kept_per_form() {
    let drafts: DraftStore = DraftStore::new(memory_storage());
    let review: ReviewForm = ReviewForm {
        rating: 4,
        comment: Some(String::from("Great fade")),
    };

    drafts.save("review:W1", &review).unwrap();

    assert_eq!(drafts.load::<ReviewForm>("review:W1").unwrap(), Some(review));
    assert_eq!(drafts.load::<ReviewForm>("review:W2").unwrap(), None);

    drafts.discard("review:W1").unwrap();
    assert_eq!(drafts.load::<ReviewForm>("review:W1").unwrap(), None);
}

#[test]
fn test_discard_all_drops_only_drafts() {
    for (name, storage) in backends() {
        let stores: ClientStores = ClientStores::hydrate(Arc::clone(&storage)).unwrap();
        stores
            .session
            .sign_in("token-1", RoleState::new(UserRole::User, false, false))
            .unwrap();
        let review: ReviewForm = ReviewForm {
            rating: 5,
            comment: None,
        };
        stores.drafts.save("review:W1", &review).unwrap();
        stores.drafts.save("review:W2", &review).unwrap();

        let removed: usize = stores.drafts.discard_all().unwrap();

        assert_eq!(removed, 2, "{name}");
        assert_eq!(stores.drafts.load::<ReviewForm>("review:W1").unwrap(), None, "{name}");
        assert!(storage.keys_with_prefix("bookit.draft.").unwrap().is_empty(), "{name}");
        assert_eq!(stores.session.token().as_deref(), Some("token-1"), "{name}");
    }
}
