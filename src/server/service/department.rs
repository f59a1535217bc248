use sea_orm::DatabaseConnection;

use crate::server::{
    data::{department::DepartmentRepository, zone::ZoneRepository},
    error::AppError,
    model::department::{CreateDepartmentParams, UpdateDepartmentParams},
    query::{
        features::Record,
        params::{FeatureParams, QueryOptions},
    },
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, AppError> {
        Ok(DepartmentRepository::new(self.db)
            .list(params, options)
            .await?)
    }

    pub async fn create(
        &self,
        params: CreateDepartmentParams,
    ) -> Result<entity::department::Model, AppError> {
        Ok(DepartmentRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, AppError> {
        Ok(DepartmentRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateDepartmentParams,
    ) -> Result<Option<entity::department::Model>, AppError> {
        Ok(DepartmentRepository::new(self.db).update(params).await?)
    }

    /// Deletes a department no zone is assigned to; `Conflict` otherwise.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if ZoneRepository::new(self.db).exists_for_department(id).await? {
            return Err(AppError::Conflict(format!(
                "Department {} is still responsible for zones and cannot be deleted",
                id
            )));
        }

        Ok(DepartmentRepository::new(self.db).delete(id).await?)
    }
}
