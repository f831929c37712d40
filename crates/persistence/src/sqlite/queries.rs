// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::kv_store;
use crate::error::PersistenceError;

/// Reads one item.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn select_item(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    let value: Option<String> = kv_store::table
        .filter(kv_store::item_key.eq(key))
        .select(kv_store::item_value)
        .first::<String>(conn)
        .optional()?;
    Ok(value)
}

/// Inserts or replaces one item.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn replace_item(
    conn: &mut SqliteConnection,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    diesel::replace_into(kv_store::table)
        .values((kv_store::item_key.eq(key), kv_store::item_value.eq(value)))
        .execute(conn)?;
    debug!(key, "Stored item");
    Ok(())
}

/// Deletes one item.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn delete_item(conn: &mut SqliteConnection, key: &str) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(kv_store::table.filter(kv_store::item_key.eq(key))).execute(conn)?;
    debug!(key, deleted, "Removed item");
    Ok(())
}

/// Lists keys starting with `prefix`, in key order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn select_keys_with_prefix(
    conn: &mut SqliteConnection,
    prefix: &str,
) -> Result<Vec<String>, PersistenceError> {
    let pattern: String = format!("{}%", escape_like(prefix));
    let keys: Vec<String> = kv_store::table
        .filter(kv_store::item_key.like(pattern).escape('\\'))
        .select(kv_store::item_key)
        .order(kv_store::item_key.asc())
        .load::<String>(conn)?;
    Ok(keys)
}

/// Escapes `LIKE` wildcards so `text` matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
