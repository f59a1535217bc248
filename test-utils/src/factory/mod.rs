//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database and take the IDs of
//! the records they reference, so parents must be created first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let city = factory::city::create_city(&db).await?;
//!
//!     // Create with all dependencies
//!     let (city, department, zone) =
//!         factory::helpers::create_zone_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let complaint = factory::complaint::ComplaintFactory::new(&db, zone.id)
//!     .title("Broken streetlight")
//!     .status(ComplaintStatus::Resolved)
//!     .created_at(Utc::now() - Duration::days(2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `city` - Create city entities
//! - `department` - Create department entities
//! - `zone` - Create zone entities
//! - `complaint` - Create complaint entities
//! - `activity` - Create activity feed entries
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod activity;
pub mod city;
pub mod complaint;
pub mod department;
pub mod helpers;
pub mod zone;

pub use activity::create_activity;
pub use city::create_city;
pub use complaint::create_complaint;
pub use department::create_department;
pub use zone::create_zone;
