use crate::server::{
    data::zone::ZoneRepository,
    error::query::QueryError,
    model::zone::CreateZoneParams,
    query::params::{FeatureParams, QueryOptions},
};
use sea_orm::DbErr;
use serde_json::Value as JsonValue;
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod exists_for;
mod get_by_id;
mod list;
