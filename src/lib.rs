//! Census Business Dynamics Statistics pipeline
//!
//! Extracts annual U.S. business-dynamics statistics from the Census BDS API,
//! cleans and enriches them, and loads them into a SQLite store that a
//! presentation layer reads.
//!
//! ## Stages
//!
//! - **Extract**: one API call per dataset shape (national, by firm age, by
//!   state), saved verbatim as `raw_*.csv`
//! - **Transform**: numeric coercion with suppression handling, derived rates,
//!   firm-age and state labels, and firm births joined onto national, saved as
//!   `clean_*.csv`
//! - **Load**: full replacement of the `national`, `by_firm_age` and
//!   `by_state` tables with indexes and a row-count check
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bds_pipeline::{commands::handle_run, core::Config};
//!
//! # async fn example() -> bds_pipeline::Result<()> {
//! let config = Config::from_env()?;
//! let report = handle_run(&config).await?;
//! println!("loaded {} rows", report.total_rows());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BDS_DATA_DIR=./data       # artifacts and the default store location
//! export BDS_DB_PATH=./data/bds.db # store path override
//! export CENSUS_API_KEY=...        # optional
//! ```

pub mod census;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;
pub mod transform;

// Re-export commonly used types
pub use census::Dataset;
pub use cli::types::{Year, YearRange};
pub use core::{Cell, Config, Table};
pub use error::{BdsError, Result, Stage};

pub const DATA_DIR_ENV_VAR: &str = "BDS_DATA_DIR";
pub const DB_PATH_ENV_VAR: &str = "BDS_DB_PATH";
pub const API_URL_ENV_VAR: &str = "BDS_API_URL";
pub const API_KEY_ENV_VAR: &str = "CENSUS_API_KEY";
