use crate::server::{
    data::city::CityRepository,
    error::query::QueryError,
    model::city::{CreateCityParams, UpdateCityParams},
    query::params::{FeatureParams, QueryOptions},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use serde_json::Value as JsonValue;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;
