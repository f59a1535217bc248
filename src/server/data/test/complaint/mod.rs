use crate::server::{
    data::complaint::ComplaintRepository,
    error::query::QueryError,
    model::complaint::CreateComplaintParams,
    query::params::{FeatureParams, QueryOptions},
};
use chrono::{DateTime, Duration, Utc};
use entity::{activity::ActivityKind, complaint::ComplaintStatus};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde_json::Value as JsonValue;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod update_status;
mod upvote;

/// Feed entries recorded for a complaint, oldest first.
async fn activities_of(
    db: &sea_orm::DatabaseConnection,
    complaint_id: i32,
) -> Result<Vec<entity::activity::Model>, DbErr> {
    entity::prelude::Activity::find()
        .filter(entity::activity::Column::ComplaintId.eq(complaint_id))
        .order_by_asc(entity::activity::Column::Id)
        .all(db)
        .await
}
