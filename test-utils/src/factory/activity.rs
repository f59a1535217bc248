//! Activity factory for creating test activity feed entries.

use chrono::Utc;
use entity::activity::ActivityKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an activity entry for a complaint.
///
/// # Arguments
/// - `db` - Database connection
/// - `complaint_id` - Complaint the entry belongs to
/// - `kind` - What happened
///
/// # Returns
/// - `Ok(entity::activity::Model)` - Created activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity(
    db: &DatabaseConnection,
    complaint_id: i32,
    kind: ActivityKind,
) -> Result<entity::activity::Model, DbErr> {
    entity::activity::ActiveModel {
        id: ActiveValue::NotSet,
        complaint_id: ActiveValue::Set(complaint_id),
        kind: ActiveValue::Set(kind),
        message: ActiveValue::Set(format!("{:?}", kind)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
