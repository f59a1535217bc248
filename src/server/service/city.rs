use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, zone::ZoneRepository},
    error::AppError,
    model::city::{CreateCityParams, UpdateCityParams},
    query::{
        features::Record,
        params::{FeatureParams, QueryOptions},
    },
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, AppError> {
        Ok(CityRepository::new(self.db).list(params, options).await?)
    }

    pub async fn create(&self, params: CreateCityParams) -> Result<entity::city::Model, AppError> {
        Ok(CityRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::city::Model>, AppError> {
        Ok(CityRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateCityParams,
    ) -> Result<Option<entity::city::Model>, AppError> {
        Ok(CityRepository::new(self.db).update(params).await?)
    }

    /// Deletes a city that no zone references.
    ///
    /// # Returns
    /// - `Ok(true)` - City deleted
    /// - `Ok(false)` - No city with that ID
    /// - `Err(AppError::Conflict)` - Zones still belong to the city
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if ZoneRepository::new(self.db).exists_for_city(id).await? {
            return Err(AppError::Conflict(format!(
                "City {} still has zones and cannot be deleted",
                id
            )));
        }

        Ok(CityRepository::new(self.db).delete(id).await?)
    }
}
