//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let city = fixture::city::entity();
//!
//! // Create with custom fields
//! let zone = fixture::zone::entity_builder()
//!     .name("Harbour Ward")
//!     .build();
//! ```

pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;

pub use city::{entity as city_entity, entity_builder as city_entity_builder};
pub use complaint::{entity as complaint_entity, entity_builder as complaint_entity_builder};
pub use department::{entity as department_entity, entity_builder as department_entity_builder};
pub use zone::{entity as zone_entity, entity_builder as zone_entity_builder};
