// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{calls, counting};
use crate::{
    AppState, ClientConfig, Connectivity, Entity, Observer, QueryClient, QueryKey,
    ResyncMonitor, ResyncReport, ResyncTrigger,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::time::Duration;

#[test]
fn test_foreground_transition_triggers_once() {
    let mut monitor: ResyncMonitor = ResyncMonitor::new();

    assert_eq!(monitor.app_state_changed(AppState::Active), None);
    assert_eq!(monitor.app_state_changed(AppState::Background), None);
    assert_eq!(
        monitor.app_state_changed(AppState::Active),
        Some(ResyncTrigger::Foreground)
    );
    assert_eq!(monitor.app_state_changed(AppState::Inactive), None);
    assert_eq!(
        monitor.app_state_changed(AppState::Active),
        Some(ResyncTrigger::Foreground)
    );
}

#[test]
fn test_reconnect_transition_triggers_once() {
    let mut monitor: ResyncMonitor = ResyncMonitor::new();

    assert_eq!(monitor.connectivity_changed(Connectivity::Online), None);
    assert_eq!(monitor.connectivity_changed(Connectivity::Offline), None);
    assert_eq!(monitor.connectivity_changed(Connectivity::Offline), None);
    assert_eq!(
        monitor.connectivity_changed(Connectivity::Online),
        Some(ResyncTrigger::Reconnect)
    );
    assert_eq!(monitor.connectivity(), Connectivity::Online);
}

#[tokio::test(start_paused = true)]
async fn test_resync_refetches_only_stale_observed_keys() {
    let client: QueryClient = QueryClient::default();
    let stale_reads: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let fresh_reads: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let stale_key: QueryKey = QueryKey::lists(Entity::Reservation);
    let fresh_key: QueryKey = QueryKey::lists(Entity::Brand);
    let stale: Observer = client.observe(stale_key.clone());
    let fresh: Observer = client.observe(fresh_key);

    let _: Value = client
        .query(&stale, counting(&stale_reads, json!([])))
        .await
        .unwrap();
    let _: Value = client
        .query(&fresh, counting(&fresh_reads, json!([])))
        .await
        .unwrap();
    client.invalidate(&stale_key);
    client
        .cache()
        .set_data(&QueryKey::lists(Entity::Worker), json!([]));

    let mut monitor: ResyncMonitor = ResyncMonitor::new();
    assert_eq!(monitor.on_app_state(&client, AppState::Background).await, None);
    let report: Option<ResyncReport> = monitor.on_app_state(&client, AppState::Active).await;

    assert_eq!(
        report,
        Some(ResyncReport {
            refetched: 1,
            failed: 0
        })
    );
    assert_eq!(calls(&stale_reads), 2);
    assert_eq!(calls(&fresh_reads), 1);
    assert!(!client.cache().is_stale(&stale_key));
}

#[tokio::test(start_paused = true)]
async fn test_unobserved_stale_keys_are_not_refetched() {
    let client: QueryClient = QueryClient::default();
    let reads: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let observer: Observer = client.observe(QueryKey::lists(Entity::Service));
    let _: Value = client
        .query(&observer, counting(&reads, json!([])))
        .await
        .unwrap();
    drop(observer);
    tokio::time::advance(Duration::from_secs(600)).await;

    let report: ResyncReport = client.resync(ResyncTrigger::Reconnect).await;

    assert_eq!(report, ResyncReport::default());
    assert_eq!(calls(&reads), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_reconnect_resync_does_nothing() {
    let config: ClientConfig = ClientConfig {
        refetch_on_reconnect: false,
        ..ClientConfig::default()
    };
    let client: QueryClient = QueryClient::new(config);
    let reads: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let observer: Observer = client.observe(QueryKey::lists(Entity::Service));
    let _: Value = client
        .query(&observer, counting(&reads, json!([])))
        .await
        .unwrap();
    tokio::time::advance(Duration::from_secs(600)).await;

    let mut monitor: ResyncMonitor = ResyncMonitor::new();
    let _ = monitor.on_connectivity(&client, Connectivity::Offline).await;
    let report: Option<ResyncReport> = monitor.on_connectivity(&client, Connectivity::Online).await;

    assert_eq!(report, None);
    assert_eq!(calls(&reads), 1);
}
