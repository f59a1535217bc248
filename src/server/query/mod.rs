//! Translation of list-endpoint query strings into database queries.
//!
//! - `params` parses and normalizes the raw query string
//! - `features` refines a base select through filter, sort, projection and pagination
//! - `expand` inlines referenced records into the fetched results

pub mod expand;
pub mod features;
pub mod params;
