use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    query::{
        features::Record,
        params::{FeatureParams, QueryOptions},
    },
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, AppError> {
        Ok(ActivityRepository::new(self.db)
            .list(params, options)
            .await?)
    }
}
