//! Zone factory for creating test zone entities.

use crate::{factory::helpers::next_id, fixture};
use entity::zone::Boundary;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test zones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let zone = ZoneFactory::new(&db, city.id, department.id)
///     .name("Harbour Ward")
///     .boundary(fixture::zone::square_boundary(0.5))
///     .build()
///     .await?;
/// ```
pub struct ZoneFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::zone::Model,
}

impl<'a> ZoneFactory<'a> {
    /// Creates a new ZoneFactory referencing the given city and department.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - City the zone belongs to
    /// - `department_id` - Department responsible for the zone
    pub fn new(db: &'a DatabaseConnection, city_id: i32, department_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::zone::entity_builder()
            .name(format!("Ward {}", id))
            .city_id(city_id)
            .department_id(department_id)
            .build();

        Self { db, entity }
    }

    /// Sets the zone name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the zone boundary polygon.
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.entity.boundary = boundary;
        self
    }

    /// Builds and inserts the zone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::zone::Model)` - Created zone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::zone::Model, DbErr> {
        entity::zone::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            city_id: ActiveValue::Set(self.entity.city_id),
            department_id: ActiveValue::Set(self.entity.department_id),
            boundary: ActiveValue::Set(self.entity.boundary),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
            version: ActiveValue::Set(self.entity.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zone with default values for the given city and department.
pub async fn create_zone(
    db: &DatabaseConnection,
    city_id: i32,
    department_id: i32,
) -> Result<entity::zone::Model, DbErr> {
    ZoneFactory::new(db, city_id, department_id).build().await
}
