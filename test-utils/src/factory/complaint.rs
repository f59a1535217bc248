//! Complaint factory for creating test complaint entities.

use crate::fixture;
use chrono::{DateTime, Utc};
use entity::complaint::ComplaintStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test complaints with customizable fields.
///
/// Unlike the repository, the factory does not write an activity record; tests that
/// exercise the activity feed create entries with the `activity` factory.
///
/// # Example
///
/// ```rust,ignore
/// let complaint = ComplaintFactory::new(&db, zone.id)
///     .status(ComplaintStatus::InProgress)
///     .upvotes(12)
///     .build()
///     .await?;
/// ```
pub struct ComplaintFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::complaint::Model,
}

impl<'a> ComplaintFactory<'a> {
    /// Creates a new ComplaintFactory with default values in the given zone.
    pub fn new(db: &'a DatabaseConnection, zone_id: i32) -> Self {
        let entity = fixture::complaint::entity_builder().zone_id(zone_id).build();

        Self { db, entity }
    }

    /// Sets the complaint title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the complaint status.
    pub fn status(mut self, status: ComplaintStatus) -> Self {
        self.entity.status = status;
        self
    }

    /// Sets the number of upvotes.
    pub fn upvotes(mut self, upvotes: i32) -> Self {
        self.entity.upvotes = upvotes;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// List endpoints sort by creation time, so tests that check ordering set this
    /// explicitly rather than relying on insertion speed.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the complaint entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::complaint::Model)` - Created complaint entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::complaint::Model, DbErr> {
        entity::complaint::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            status: ActiveValue::Set(self.entity.status),
            upvotes: ActiveValue::Set(self.entity.upvotes),
            zone_id: ActiveValue::Set(self.entity.zone_id),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
            version: ActiveValue::Set(self.entity.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending complaint with default values in the given zone.
pub async fn create_complaint(
    db: &DatabaseConnection,
    zone_id: i32,
) -> Result<entity::complaint::Model, DbErr> {
    ComplaintFactory::new(db, zone_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_zone_with_dependencies;

    #[tokio::test]
    async fn creates_complaint_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, zone) = create_zone_with_dependencies(db).await?;
        let complaint = create_complaint(db, zone.id).await?;

        assert_eq!(complaint.zone_id, zone.id);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.upvotes, 0);
        assert_eq!(complaint.version, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_complaint_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, zone) = create_zone_with_dependencies(db).await?;
        let complaint = ComplaintFactory::new(db, zone.id)
            .title("Graffiti on bridge")
            .status(ComplaintStatus::Resolved)
            .upvotes(7)
            .build()
            .await?;

        assert_eq!(complaint.title, "Graffiti on bridge");
        assert_eq!(complaint.status, ComplaintStatus::Resolved);
        assert_eq!(complaint.upvotes, 7);

        Ok(())
    }
}
