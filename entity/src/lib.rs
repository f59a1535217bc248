//! SeaORM entities for the civic complaint tracker.

pub mod prelude;

pub mod activity;
pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;
