//! Business logic layer between controllers and repositories.
//!
//! Services check cross-entity rules that a single repository cannot, such as whether
//! a referenced city exists before a zone is created or whether a department is still
//! in use before it is deleted, and translate those outcomes into [`AppError`] variants.
//!
//! [`AppError`]: crate::server::error::AppError

pub mod activity;
pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;
