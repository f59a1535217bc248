use entity::complaint::ComplaintStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        complaint::{ComplaintRepository, StatusChange},
        zone::ZoneRepository,
    },
    error::AppError,
    model::complaint::CreateComplaintParams,
    query::{
        features::Record,
        params::{FeatureParams, QueryOptions},
    },
};

pub struct ComplaintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, AppError> {
        Ok(ComplaintRepository::new(self.db)
            .list(params, options)
            .await?)
    }

    /// Files a complaint in an existing zone; `BadRequest` if the zone does not exist.
    pub async fn create(
        &self,
        params: CreateComplaintParams,
    ) -> Result<entity::complaint::Model, AppError> {
        if !ZoneRepository::new(self.db).exists(params.zone_id).await? {
            return Err(AppError::BadRequest(format!(
                "Zone {} does not exist",
                params.zone_id
            )));
        }

        let complaint = ComplaintRepository::new(self.db).create(params).await?;

        tracing::info!(id = complaint.id, zone_id = complaint.zone_id, "Complaint filed");

        Ok(complaint)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::complaint::Model>, AppError> {
        Ok(ComplaintRepository::new(self.db).get_by_id(id).await?)
    }

    /// Moves a complaint to a different status.
    ///
    /// # Returns
    /// - `Ok(Some(complaint))` - Status changed
    /// - `Ok(None)` - No complaint with that ID
    /// - `Err(AppError::BadRequest)` - The complaint already has that status
    /// - `Err(AppError::Conflict)` - The status was changed by a concurrent request
    pub async fn update_status(
        &self,
        id: i32,
        status: ComplaintStatus,
    ) -> Result<Option<entity::complaint::Model>, AppError> {
        match ComplaintRepository::new(self.db)
            .update_status(id, status)
            .await?
        {
            StatusChange::Changed(complaint) => Ok(Some(complaint)),
            StatusChange::NotFound => Ok(None),
            StatusChange::Unchanged => Err(AppError::BadRequest(format!(
                "Complaint {} is already {:?}",
                id, status
            ))),
            StatusChange::Conflict => Err(AppError::Conflict(format!(
                "Complaint {} was modified by another request, retry the status change",
                id
            ))),
        }
    }

    pub async fn upvote(&self, id: i32) -> Result<Option<entity::complaint::Model>, AppError> {
        Ok(ComplaintRepository::new(self.db).upvote(id).await?)
    }
}
