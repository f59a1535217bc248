//! API data transfer objects.
//!
//! Serializable request and response bodies exchanged with clients. Server-side
//! conversion to and from entities lives in `server::model`.

pub mod api;
pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;
