//! Relational expansion of projected list records.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::server::{
    error::query::QueryError,
    query::features::{Record, VERSION_FIELD},
};

/// Replaces the foreign key `key` of every record with the referenced record under `into`.
///
/// Referenced records are loaded with a single `IN` query on `id_column`. Records whose
/// projection dropped `key` are left untouched; a key pointing at a missing record is
/// expanded to `null`. Expanded records never carry the internal version counter.
///
/// # Arguments
/// - `db` - Connection used for the lookup
/// - `records` - Projected list records to rewrite in place
/// - `key` - Foreign key field, e.g. `city_id`
/// - `into` - Field receiving the expanded record, e.g. `city`
/// - `id_column` - Primary key column of the referenced entity
///
/// # Returns
/// - `Ok(())` - Records rewritten
/// - `Err(QueryError)` - Lookup or serialization failed
pub async fn expand<R, C>(
    db: &C,
    records: &mut [Record],
    key: &str,
    into: &str,
    id_column: R::Column,
) -> Result<(), QueryError>
where
    R: EntityTrait,
    R::Model: Serialize,
    C: ConnectionTrait,
{
    let mut ids: Vec<i64> = records
        .iter()
        .filter_map(|record| record.get(key).and_then(JsonValue::as_i64))
        .collect();
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Ok(());
    }

    let related: HashMap<i64, JsonValue> = R::find()
        .filter(id_column.is_in(ids))
        .all(db)
        .await?
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter_map(|mut value| {
            if let Some(fields) = value.as_object_mut() {
                fields.remove(VERSION_FIELD);
            }
            value.get("id").and_then(JsonValue::as_i64).map(|id| (id, value))
        })
        .collect();

    for record in records.iter_mut() {
        let Some(id) = record.remove(key) else {
            continue;
        };

        let expanded = id
            .as_i64()
            .and_then(|id| related.get(&id).cloned())
            .unwrap_or(JsonValue::Null);
        record.insert(into.to_string(), expanded);
    }

    Ok(())
}
