// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use crate::{KeyValueStorage, MemoryStorage, SqliteStorage};
use std::sync::Arc;

pub fn memory_storage() -> Arc<dyn KeyValueStorage> {
    Arc::new(MemoryStorage::new())
}

pub fn sqlite_storage() -> Arc<dyn KeyValueStorage> {
    Arc::new(SqliteStorage::in_memory().unwrap())
}

pub fn backends() -> Vec<(&'static str, Arc<dyn KeyValueStorage>)> {
    vec![("memory", memory_storage()), ("sqlite", sqlite_storage())]
}
