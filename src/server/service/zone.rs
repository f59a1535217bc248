use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        city::CityRepository, complaint::ComplaintRepository, department::DepartmentRepository,
        zone::ZoneRepository,
    },
    error::AppError,
    model::zone::{CreateZoneParams, ZoneWithRelations},
    query::{
        features::Record,
        params::{FeatureParams, QueryOptions},
    },
};

pub struct ZoneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ZoneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, AppError> {
        Ok(ZoneRepository::new(self.db).list(params, options).await?)
    }

    /// Creates a zone after checking that its city and department exist.
    ///
    /// # Returns
    /// - `Ok(ZoneWithRelations)` - Created zone with its city and department
    /// - `Err(AppError::BadRequest)` - The city or department does not exist
    pub async fn create(&self, params: CreateZoneParams) -> Result<ZoneWithRelations, AppError> {
        if !CityRepository::new(self.db).exists(params.city_id).await? {
            return Err(AppError::BadRequest(format!(
                "City {} does not exist",
                params.city_id
            )));
        }

        if !DepartmentRepository::new(self.db)
            .exists(params.department_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Department {} does not exist",
                params.department_id
            )));
        }

        let repo = ZoneRepository::new(self.db);
        let zone = repo.create(params).await?;

        repo.get_by_id(zone.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Zone {} not found after creation", zone.id)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ZoneWithRelations>, AppError> {
        Ok(ZoneRepository::new(self.db).get_by_id(id).await?)
    }

    /// Deletes a zone with no complaints filed in it; `Conflict` otherwise.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if ComplaintRepository::new(self.db).exists_for_zone(id).await? {
            return Err(AppError::Conflict(format!(
                "Zone {} has complaints and cannot be deleted",
                id
            )));
        }

        Ok(ZoneRepository::new(self.db).delete(id).await?)
    }
}
