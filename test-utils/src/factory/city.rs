//! City factory for creating test city entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// Defaults are sourced from `fixture::city` with a unique name suffix, since city
/// names are unique.
///
/// # Example
///
/// ```rust,ignore
/// let city = CityFactory::new(&db).name("Shelbyville").build().await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::city::Model,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::city::entity_builder()
            .name(format!("{} {}", fixture::city::DEFAULT_NAME, id))
            .build();

        Self { db, entity }
    }

    /// Sets the city name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the state the city belongs to.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.entity.state = state.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            state: ActiveValue::Set(self.entity.state),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
            version: ActiveValue::Set(self.entity.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
///
/// Shorthand for `CityFactory::new(db).build().await`.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
