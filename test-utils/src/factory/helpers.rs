//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// City and department names are unique columns, so each factory-created record
/// takes a fresh suffix from this counter.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a zone together with the city and department it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((city, department, zone))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_zone_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::city::Model,
        entity::department::Model,
        entity::zone::Model,
    ),
    DbErr,
> {
    let city = crate::factory::city::create_city(db).await?;
    let department = crate::factory::department::create_department(db).await?;
    let zone = crate::factory::zone::create_zone(db, city.id, department.id).await?;

    Ok((city, department, zone))
}

/// Creates a complaint together with its zone, city and department.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((zone, complaint))` - The created zone and complaint
/// - `Err(DbErr)` - Database error during creation
pub async fn create_complaint_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::zone::Model, entity::complaint::Model), DbErr> {
    let (_, _, zone) = create_zone_with_dependencies(db).await?;
    let complaint = crate::factory::complaint::create_complaint(db, zone.id).await?;

    Ok((zone, complaint))
}
