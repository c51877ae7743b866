//! Core utilities for the BDS pipeline
//!
//! This module consolidates the pieces every stage relies on:
//! - `table`: typed in-memory tables
//! - `columns`: column names, rate definitions and storage kinds
//! - `artifacts`: CSV stage files
//! - `config`: environment-driven configuration

pub mod artifacts;
pub mod columns;
pub mod config;
pub mod table;

// Re-export commonly used items for convenience
pub use artifacts::{read_table, write_table, write_tables, ArtifactKind};
pub use config::Config;
pub use table::{Cell, Table};
