//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Cross-entity rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations through SeaORM repositories
//! - **Query Layer** (`query/`) - Filter, sort, projection and pagination of list endpoints
//! - **Model Layer** (`model/`) - Validated parameter types and entity conversions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations, tracing and shutdown signal
//! - **Router** (`router`) - Route table, OpenAPI document and middleware
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses list parameters or validates the body into params
//! 3. **Service** checks references and calls the repositories
//! 4. **Data** runs the query, through the query-feature pipeline for lists
//! 5. **Controller** wraps the result in a success envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
