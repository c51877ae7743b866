//! Storage layer for the BDS pipeline
//!
//! This module wraps the SQLite store, organized into logical components:
//! - `models`: Load reports
//! - `schema`: Connection management
//! - `load`: Full-refresh table replacement and index creation
//! - `queries`: Read-side selects for the presentation layer

pub mod load;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::BdsDatabase;
