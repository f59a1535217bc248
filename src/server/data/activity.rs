use chrono::Utc;
use entity::activity::ActivityKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::{
    error::query::QueryError,
    query::{
        expand::expand,
        features::{ApiFeatures, Record},
        params::{FeatureParams, QueryOptions},
    },
};

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists feed entries through the query-feature pipeline with `complaint` expanded.
    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, QueryError> {
        let mut records = ApiFeatures::new(entity::prelude::Activity::find(), params, options)
            .filter()?
            .sort()
            .limit_fields()
            .paginate()
            .into_query()
            .all(self.db)
            .await?;

        expand::<entity::prelude::Complaint, _>(
            self.db,
            &mut records,
            "complaint_id",
            "complaint",
            entity::complaint::Column::Id,
        )
        .await?;

        Ok(records)
    }
}

/// Records a feed entry on `conn`, typically the transaction of the write it describes.
pub(crate) async fn record<C: ConnectionTrait>(
    conn: &C,
    complaint_id: i32,
    kind: ActivityKind,
    message: String,
) -> Result<entity::activity::Model, DbErr> {
    entity::activity::ActiveModel {
        complaint_id: ActiveValue::Set(complaint_id),
        kind: ActiveValue::Set(kind),
        message: ActiveValue::Set(message),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await
}
