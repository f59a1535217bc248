use crate::server::{
    data::activity::ActivityRepository,
    error::query::QueryError,
    query::params::{FeatureParams, QueryOptions},
};
use entity::activity::ActivityKind;
use serde_json::Value as JsonValue;
use test_utils::{builder::TestBuilder, factory};

mod list;
