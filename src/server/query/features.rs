//! The query-feature pipeline shared by every list endpoint.
//!
//! [`ApiFeatures`] wraps a SeaORM [`Select`] and refines it in four chained stages:
//!
//! ```rust,ignore
//! let records = ApiFeatures::new(entity::zone::Entity::find(), &params, options)
//!     .filter()?
//!     .sort()
//!     .limit_fields()
//!     .paginate()
//!     .into_query()
//!     .all(db)
//!     .await?;
//! ```
//!
//! No stage touches the database. The caller executes the finished [`FeatureQuery`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ColumnType, ConnectionTrait, EntityTrait, IdenStatic, Iterable, Order,
    PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::server::{
    error::query::QueryError,
    query::params::{FeatureParams, FilterClause, FilterOp, QueryOptions, SortKey},
};

/// A fetched record serialized to a JSON object and restricted to the projection.
pub type Record = Map<String, JsonValue>;

/// Largest offset or page size the database driver can bind.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Column used for the default newest-first ordering.
const DEFAULT_SORT_FIELD: &str = "created_at";

/// Internal revision counter hidden from responses unless explicitly requested.
pub(crate) const VERSION_FIELD: &str = "version";

/// A filter that was applied to the query, with its value coerced to the column type.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

/// Record of what each pipeline stage applied.
///
/// Field names are canonical column names, so `sort=-createdAt` is recorded as
/// `created_at` descending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFeatures {
    pub criteria: Vec<Criterion>,
    /// Filter fields that name no column. Any entry forces an empty result.
    pub unmatched_fields: Vec<String>,
    pub order: Vec<SortKey>,
    pub projection: Vec<String>,
    pub skip: u64,
    pub limit: u64,
}

/// Request-scoped builder translating [`FeatureParams`] into a refined [`Select`].
pub struct ApiFeatures<'p, E: EntityTrait> {
    query: Select<E>,
    params: &'p FeatureParams,
    options: QueryOptions,
    applied: AppliedFeatures,
}

impl<'p, E: EntityTrait> ApiFeatures<'p, E> {
    /// Wraps a base query; nothing is applied until the stages run.
    ///
    /// # Arguments
    /// - `query` - Base select for the collection, possibly already narrowed by the caller
    /// - `params` - Parsed list parameters of the current request
    /// - `options` - Default and maximum page sizes
    pub fn new(query: Select<E>, params: &'p FeatureParams, options: QueryOptions) -> Self {
        Self {
            query,
            params,
            options,
            applied: AppliedFeatures::default(),
        }
    }

    /// Applies every filter clause as an `AND`ed column comparison.
    ///
    /// Field names are matched against the entity's columns in snake_case or camelCase.
    /// A clause naming no column makes the query match nothing instead of failing.
    ///
    /// # Returns
    /// - `Ok(Self)` - Builder with filter criteria applied
    /// - `Err(QueryError::InvalidValue)` - A value does not parse as its column's type
    /// - `Err(QueryError::UnsupportedField)` - A clause targets a JSON column
    pub fn filter(mut self) -> Result<Self, QueryError> {
        let params = self.params;

        for clause in &params.filters {
            let Some(column) = column::<E>(&clause.field) else {
                tracing::debug!(field = %clause.field, "Filter on unknown field matches nothing");
                self.applied.unmatched_fields.push(clause.field.clone());
                continue;
            };

            let value = coerce(&column, clause)?;
            let expr = match clause.op {
                FilterOp::Eq => column.eq(value.clone()),
                FilterOp::Gte => column.gte(value.clone()),
                FilterOp::Gt => column.gt(value.clone()),
                FilterOp::Lte => column.lte(value.clone()),
                FilterOp::Lt => column.lt(value.clone()),
            };

            self.query = self.query.filter(expr);
            self.applied.criteria.push(Criterion {
                field: column.as_str().to_string(),
                op: clause.op,
                value,
            });
        }

        if !self.applied.unmatched_fields.is_empty() {
            // A primary key is never NULL, so this predicate matches no row.
            for key in E::PrimaryKey::iter() {
                self.query = self.query.filter(key.into_column().is_null());
            }
        }

        tracing::debug!(criteria = ?self.applied.criteria, "Applied list filters");

        Ok(self)
    }

    /// Applies the requested ordering, or newest-first when none was requested.
    ///
    /// Unknown sort fields are skipped. The primary key is always appended as a final
    /// tie-breaker so that consecutive pages never overlap.
    pub fn sort(mut self) -> Self {
        let (keys, tie_break_descending) = match &self.params.sort {
            Some(keys) => (keys.clone(), false),
            None => (vec![SortKey::desc(DEFAULT_SORT_FIELD)], true),
        };

        for key in keys {
            let Some(column) = column::<E>(&key.field) else {
                tracing::debug!(field = %key.field, "Skipping sort on unknown field");
                continue;
            };

            self.query = self.query.order_by(column, direction(key.descending));
            self.applied.order.push(SortKey {
                field: column.as_str().to_string(),
                descending: key.descending,
            });
        }

        for key in E::PrimaryKey::iter() {
            let column = key.into_column();
            if !self.applied.order.iter().any(|k| k.field == column.as_str()) {
                self.query = self
                    .query
                    .order_by(column, direction(tie_break_descending));
            }
        }

        self
    }

    /// Decides which fields each returned record carries.
    ///
    /// With `fields`, the projection is the primary key plus every requested field that
    /// names a column. Without it, every column except the internal version counter.
    pub fn limit_fields(mut self) -> Self {
        let projection = match &self.params.fields {
            Some(fields) => {
                let mut projection: Vec<String> = E::PrimaryKey::iter()
                    .map(|key| key.into_column().as_str().to_string())
                    .collect();

                for field in fields {
                    match column::<E>(field) {
                        Some(column) => {
                            let name = column.as_str().to_string();
                            if !projection.contains(&name) {
                                projection.push(name);
                            }
                        }
                        None => tracing::debug!(%field, "Skipping projection of unknown field"),
                    }
                }

                projection
            }
            None => E::Column::iter()
                .map(|column| column.as_str().to_string())
                .filter(|name| name != VERSION_FIELD)
                .collect(),
        };

        self.applied.projection = projection;
        self
    }

    /// Applies `OFFSET (page - 1) * limit` and `LIMIT limit`.
    ///
    /// Both are capped at `i64::MAX`; a page past that offset is simply empty.
    pub fn paginate(mut self) -> Self {
        let page = self.params.page();
        let limit = self.params.limit(&self.options).min(MAX_BOUND);
        let skip = (page - 1).saturating_mul(limit).min(MAX_BOUND);

        self.query = self.query.offset(skip).limit(limit);
        self.applied.skip = skip;
        self.applied.limit = limit;

        self
    }

    /// What the stages run so far have applied.
    pub fn applied(&self) -> &AppliedFeatures {
        &self.applied
    }

    /// Finishes the pipeline, yielding the query for the caller to execute.
    pub fn into_query(self) -> FeatureQuery<E> {
        tracing::debug!(
            order = ?self.applied.order,
            skip = self.applied.skip,
            limit = self.applied.limit,
            "Built list query"
        );

        FeatureQuery {
            select: self.query,
            projection: self.applied.projection,
        }
    }
}

/// A refined, not yet executed list query.
pub struct FeatureQuery<E: EntityTrait> {
    select: Select<E>,
    projection: Vec<String>,
}

impl<E: EntityTrait> FeatureQuery<E> {
    /// The SQL select carrying filters, ordering and pagination.
    pub fn select(&self) -> &Select<E> {
        &self.select
    }

    /// Field names kept in each returned record.
    pub fn projection(&self) -> &[String] {
        &self.projection
    }

    /// Executes the query and returns the projected records in query order.
    ///
    /// # Returns
    /// - `Ok(Vec<Record>)` - Matching records, at most one page
    /// - `Err(QueryError::DbErr)` - Query execution failed
    /// - `Err(QueryError::SerializeErr)` - A model could not be serialized
    pub async fn all<C>(self, db: &C) -> Result<Vec<Record>, QueryError>
    where
        C: ConnectionTrait,
        E::Model: Serialize,
    {
        let models = self.select.all(db).await?;

        models
            .iter()
            .map(|model| project(model, &self.projection))
            .collect()
    }
}

/// Serializes a model and keeps only the projected fields.
pub fn project<M: Serialize>(model: &M, projection: &[String]) -> Result<Record, QueryError> {
    let mut record = match serde_json::to_value(model)? {
        JsonValue::Object(map) => map,
        _ => Record::new(),
    };

    record.retain(|key, _| projection.iter().any(|field| field == key));

    Ok(record)
}

fn column<E: EntityTrait>(field: &str) -> Option<E::Column> {
    E::Column::from_str(field).ok()
}

fn direction(descending: bool) -> Order {
    if descending {
        Order::Desc
    } else {
        Order::Asc
    }
}

/// Converts a raw filter value to the SQL type of `column`.
fn coerce<C: ColumnTrait>(column: &C, clause: &FilterClause) -> Result<Value, QueryError> {
    let raw = clause.value.trim();
    let invalid = || QueryError::InvalidValue {
        field: column.as_str().to_string(),
        op: clause.op,
        value: clause.value.clone(),
    };

    let value = match column.def().get_column_type() {
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer => {
            raw.parse::<i32>().map(Value::from).map_err(|_| invalid())?
        }
        ColumnType::BigInteger => raw.parse::<i64>().map(Value::from).map_err(|_| invalid())?,
        ColumnType::Float | ColumnType::Double | ColumnType::Decimal(_) => {
            raw.parse::<f64>().map(Value::from).map_err(|_| invalid())?
        }
        ColumnType::Boolean => raw.parse::<bool>().map(Value::from).map_err(|_| invalid())?,
        ColumnType::Timestamp | ColumnType::TimestampWithTimeZone | ColumnType::DateTime => {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| Value::from(dt.with_timezone(&Utc)))
                .map_err(|_| invalid())?
        }
        ColumnType::Json | ColumnType::JsonBinary => {
            return Err(QueryError::UnsupportedField(column.as_str().to_string()))
        }
        _ => Value::from(clause.value.clone()),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn run(query: &str) -> (AppliedFeatures, String) {
        let params = FeatureParams::from_query_str(query);
        let features = ApiFeatures::new(Complaint::find(), &params, QueryOptions::default())
            .filter()
            .unwrap()
            .sort()
            .limit_fields()
            .paginate();
        let applied = features.applied().clone();
        let query = features.into_query();
        assert_eq!(query.projection(), applied.projection.as_slice());
        let sql = query.select().build(DbBackend::Sqlite).to_string();

        (applied, sql)
    }

    #[test]
    fn defaults_to_first_page_of_one_hundred() {
        let (applied, sql) = run("");

        assert_eq!(applied.skip, 0);
        assert_eq!(applied.limit, 100);
        assert!(sql.contains("LIMIT 100 OFFSET 0"), "{sql}");
    }

    #[test]
    fn computes_skip_from_page_and_limit() {
        let (applied, sql) = run("page=3&limit=10");

        assert_eq!(applied.skip, 20);
        assert_eq!(applied.limit, 10);
        assert!(sql.contains("LIMIT 10 OFFSET 20"), "{sql}");
    }

    #[test]
    fn caps_offset_of_huge_page() {
        let (applied, sql) = run("page=18446744073709551615");

        assert_eq!(applied.skip, i64::MAX as u64);
        assert_eq!(applied.limit, 100);
        assert!(sql.contains(&format!("OFFSET {}", i64::MAX)), "{sql}");
    }

    #[test]
    fn caps_limit_of_unbounded_options() {
        let params = FeatureParams::from_query_str("page=3&limit=18446744073709551615");
        let options = QueryOptions {
            default_limit: 100,
            max_limit: u64::MAX,
        };
        let features = ApiFeatures::new(Complaint::find(), &params, options).paginate();

        assert_eq!(features.applied().limit, i64::MAX as u64);
        assert_eq!(features.applied().skip, i64::MAX as u64);
    }

    #[test]
    fn defaults_to_newest_first_with_id_tie_breaker() {
        let (applied, sql) = run("");

        assert_eq!(applied.order, vec![SortKey::desc("created_at")]);
        assert!(
            sql.contains(r#"ORDER BY "complaint"."created_at" DESC, "complaint"."id" DESC"#),
            "{sql}"
        );
    }

    #[test]
    fn applies_requested_sort_order() {
        let (applied, sql) = run("sort=-createdAt,title");

        assert_eq!(
            applied.order,
            vec![SortKey::desc("created_at"), SortKey::asc("title")]
        );
        assert!(
            sql.contains(
                r#"ORDER BY "complaint"."created_at" DESC, "complaint"."title" ASC, "complaint"."id" ASC"#
            ),
            "{sql}"
        );
    }

    #[test]
    fn skips_unknown_sort_fields() {
        let (applied, _) = run("sort=popularity,-upvotes");

        assert_eq!(applied.order, vec![SortKey::desc("upvotes")]);
    }

    #[test]
    fn projects_requested_fields_and_id() {
        let (applied, _) = run("fields=title,status");

        assert_eq!(applied.projection, vec!["id", "title", "status"]);
    }

    #[test]
    fn default_projection_hides_version() {
        let (applied, _) = run("");

        assert!(applied.projection.contains(&"id".to_string()));
        assert!(applied.projection.contains(&"created_at".to_string()));
        assert!(!applied.projection.contains(&"version".to_string()));
    }

    #[test]
    fn rewrites_comparison_into_typed_criterion() {
        let (applied, sql) = run("upvotes[gte]=100");

        assert_eq!(
            applied.criteria,
            vec![Criterion {
                field: "upvotes".to_string(),
                op: FilterOp::Gte,
                value: Value::from(100i32),
            }]
        );
        assert!(sql.contains(r#""complaint"."upvotes" >= 100"#), "{sql}");
    }

    #[test]
    fn reserved_keys_are_not_filters() {
        let (applied, _) = run("page=2&sort=title&limit=5&fields=title&status=Pending");

        let fields: Vec<_> = applied.criteria.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["status"]);
        assert_eq!(applied.criteria[0].value, Value::from("Pending".to_string()));
    }

    #[test]
    fn unknown_filter_field_matches_nothing() {
        let (applied, sql) = run("colour=red");

        assert!(applied.criteria.is_empty());
        assert_eq!(applied.unmatched_fields, vec!["colour"]);
        assert!(sql.contains(r#""complaint"."id" IS NULL"#), "{sql}");
    }

    #[test]
    fn rejects_value_of_wrong_type() {
        let params = FeatureParams::from_query_str("upvotes[gt]=many");
        let result =
            ApiFeatures::new(Complaint::find(), &params, QueryOptions::default()).filter();

        assert!(matches!(
            result,
            Err(QueryError::InvalidValue { ref field, op: FilterOp::Gt, .. }) if field == "upvotes"
        ));
    }

    #[test]
    fn rejects_filter_on_json_column() {
        let params = FeatureParams::from_query_str("boundary=x");
        let result = ApiFeatures::new(Zone::find(), &params, QueryOptions::default()).filter();

        assert!(matches!(result, Err(QueryError::UnsupportedField(ref f)) if f == "boundary"));
    }

    #[test]
    fn coerces_timestamps() {
        let (applied, _) = run("createdAt[lt]=2026-03-01T12:00:00Z");

        let expected = DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(applied.criteria[0].field, "created_at");
        assert_eq!(applied.criteria[0].value, Value::from(expected));
    }

    #[test]
    fn project_keeps_only_listed_fields() {
        let model = test_utils::fixture::complaint::entity();
        let record = project(&model, &["id".to_string(), "title".to_string()]).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record["title"], JsonValue::from(model.title.clone()));
        assert!(!record.contains_key("status"));
    }
}
