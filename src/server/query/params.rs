//! Parsing of list-endpoint query strings into [`FeatureParams`].
//!
//! Recognized keys are `page`, `limit`, `sort` and `fields`. Every other key is a filter
//! clause, either an exact match (`status=Pending`) or a comparison written with a bracket
//! suffix (`upvotes[gte]=10`).

use std::{convert::Infallible, fmt};

use axum::{extract::FromRequestParts, http::request::Parts};

/// Page returned when `page` is absent or malformed.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `limit` is absent or malformed.
pub const DEFAULT_LIMIT: u64 = 100;

/// Upper bound applied to `limit` unless configured otherwise.
pub const DEFAULT_MAX_LIMIT: u64 = 1000;

/// Comparison applied by a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl FilterOp {
    /// Maps a bracket suffix (`gte` in `price[gte]`) to its operator.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "gte" => Some(Self::Gte),
            "gt" => Some(Self::Gt),
            "lte" => Some(Self::Lte),
            "lt" => Some(Self::Lt),
            _ => None,
        }
    }

    /// MongoDB-style operator name, used in logs and error messages.
    pub fn operator(&self) -> &'static str {
        match self {
            Self::Eq => "$eq",
            Self::Gte => "$gte",
            Self::Gt => "$gt",
            Self::Lte => "$lte",
            Self::Lt => "$lt",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

/// A single `field op value` filter taken from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FilterClause {
    /// Splits a raw key into field and operator.
    ///
    /// Only the four comparison suffixes are recognized. Any other key, including one with
    /// an unknown bracket suffix such as `status[ne]`, is an exact match on the literal key.
    fn parse(key: &str, value: &str) -> Self {
        let comparison = key
            .strip_suffix(']')
            .and_then(|rest| rest.split_once('['))
            .and_then(|(field, suffix)| FilterOp::from_suffix(suffix).map(|op| (field, op)));

        match comparison {
            Some((field, op)) if !field.is_empty() => Self {
                field: field.to_string(),
                op,
                value: value.to_string(),
            },
            _ => Self {
                field: key.to_string(),
                op: FilterOp::Eq,
                value: value.to_string(),
            },
        }
    }
}

/// One entry of the `sort` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    fn parse(segment: &str) -> Option<Self> {
        let segment = segment.trim();
        match segment.strip_prefix('-') {
            Some(field) if !field.is_empty() => Some(Self::desc(field)),
            Some(_) => None,
            None if !segment.is_empty() => Some(Self::asc(segment)),
            None => None,
        }
    }
}

/// Server-side bounds for pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Page size used when the request names none.
    pub default_limit: u64,
    /// Largest page size a request may ask for; larger values are clamped.
    pub max_limit: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

/// Validated list-endpoint parameters.
///
/// Built once per request by [`FeatureParams::from_query_str`] and consumed by
/// [`ApiFeatures`](super::features::ApiFeatures). Malformed `page`/`limit` values are
/// normalized to absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<Vec<SortKey>>,
    pub fields: Option<Vec<String>>,
    pub filters: Vec<FilterClause>,
}

impl FeatureParams {
    /// Parses a raw, percent-encoded query string (without the leading `?`).
    pub fn from_query_str(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Parses already-decoded key/value pairs.
    ///
    /// Repeated `sort` and `fields` keys are concatenated in order; a repeated `page` or
    /// `limit` keeps the last valid value; repeated filter keys produce one clause each.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        let mut sort: Vec<SortKey> = Vec::new();
        let mut fields: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "page" => {
                    if let Some(page) = parse_positive(value) {
                        params.page = Some(page);
                    }
                }
                "limit" => {
                    if let Some(limit) = parse_positive(value) {
                        params.limit = Some(limit);
                    }
                }
                "sort" => sort.extend(value.split(',').filter_map(SortKey::parse)),
                "fields" => fields.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(str::to_string),
                ),
                _ => params.filters.push(FilterClause::parse(key, value)),
            }
        }

        params.sort = (!sort.is_empty()).then_some(sort);
        params.fields = (!fields.is_empty()).then_some(fields);
        params
    }

    /// Requested page, 1-based.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size, defaulted and clamped by `options`.
    pub fn limit(&self, options: &QueryOptions) -> u64 {
        self.limit
            .unwrap_or(options.default_limit)
            .min(options.max_limit)
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

impl<S> FromRequestParts<S> for FeatureParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query_str(parts.uri.query().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        let params = FeatureParams::from_query_str("");

        assert_eq!(params, FeatureParams::default());
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(&QueryOptions::default()), 100);
    }

    #[test]
    fn reserved_keys_never_become_filters() {
        let params =
            FeatureParams::from_query_str("page=2&sort=name&limit=5&fields=name&status=Pending");

        assert_eq!(
            params.filters,
            vec![FilterClause {
                field: "status".to_string(),
                op: FilterOp::Eq,
                value: "Pending".to_string(),
            }]
        );
    }

    #[test]
    fn parses_comparison_suffixes() {
        let params = FeatureParams::from_query_str(
            "upvotes%5Bgte%5D=100&upvotes[lt]=500&id[gt]=3&created_at[lte]=2026-01-01T00:00:00Z",
        );

        let ops: Vec<_> = params.filters.iter().map(|f| (f.field.as_str(), f.op)).collect();
        assert_eq!(
            ops,
            vec![
                ("upvotes", FilterOp::Gte),
                ("upvotes", FilterOp::Lt),
                ("id", FilterOp::Gt),
                ("created_at", FilterOp::Lte),
            ]
        );
        assert_eq!(params.filters[0].value, "100");
        assert_eq!(params.filters[0].op.operator(), "$gte");
    }

    #[test]
    fn unknown_suffix_is_literal_exact_match() {
        let params = FeatureParams::from_query_str("status[ne]=Resolved&[gte]=1");

        assert_eq!(params.filters[0].field, "status[ne]");
        assert_eq!(params.filters[0].op, FilterOp::Eq);
        assert_eq!(params.filters[1].field, "[gte]");
        assert_eq!(params.filters[1].op, FilterOp::Eq);
    }

    #[test]
    fn parses_sort_list_with_direction() {
        let params = FeatureParams::from_query_str("sort=-createdAt,name");

        assert_eq!(
            params.sort,
            Some(vec![SortKey::desc("createdAt"), SortKey::asc("name")])
        );
    }

    #[test]
    fn repeated_sort_and_fields_are_joined() {
        let params = FeatureParams::from_query_str("sort=name&sort=-id&fields=name&fields=,state,");

        assert_eq!(params.sort, Some(vec![SortKey::asc("name"), SortKey::desc("id")]));
        assert_eq!(
            params.fields,
            Some(vec!["name".to_string(), "state".to_string()])
        );
    }

    #[test]
    fn blank_sort_and_fields_are_absent() {
        let params = FeatureParams::from_query_str("sort=,-&fields=");

        assert_eq!(params.sort, None);
        assert_eq!(params.fields, None);
    }

    #[test]
    fn malformed_pagination_falls_back_to_defaults() {
        for query in ["page=abc&limit=xyz", "page=0&limit=0", "page=-2&limit=-5", "page=&limit="] {
            let params = FeatureParams::from_query_str(query);
            assert_eq!(params.page(), 1, "{query}");
            assert_eq!(params.limit(&QueryOptions::default()), 100, "{query}");
        }
    }

    #[test]
    fn limit_is_clamped_to_configured_cap() {
        let params = FeatureParams::from_query_str("limit=5000");
        let options = QueryOptions {
            default_limit: 100,
            max_limit: 250,
        };

        assert_eq!(params.limit(&options), 250);
        assert_eq!(params.limit(&QueryOptions::default()), DEFAULT_MAX_LIMIT);
    }
}
