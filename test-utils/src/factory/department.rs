//! Department factory for creating test department entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db).name("Sanitation").build().await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::department::Model,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with default values from fixture and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::department::entity_builder()
            .name(format!("{} {}", fixture::department::DEFAULT_NAME, id))
            .build();

        Self { db, entity }
    }

    /// Sets the department name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the department contact email.
    pub fn contact_email(mut self, contact_email: Option<String>) -> Self {
        self.entity.contact_email = contact_email;
        self
    }

    /// Builds and inserts the department entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::department::Model)` - Created department entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            contact_email: ActiveValue::Set(self.entity.contact_email),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
            version: ActiveValue::Set(self.entity.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
