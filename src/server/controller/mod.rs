//! HTTP request handlers.
//!
//! Each module owns the endpoints of one resource and exposes a `router()` that the
//! top-level router merges. Handlers convert DTOs to server params, call the matching
//! service and wrap results in the success envelopes of [`crate::model::api`].

pub mod activity;
pub mod city;
pub mod complaint;
pub mod department;
pub mod health;
pub mod zone;
