//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Year;

/// Year-range filter shared by the query subcommands
#[derive(Debug, Args)]
pub struct YearFilter {
    /// First year to include (e.g. 1990).
    #[clap(long)]
    pub from: Option<Year>,

    /// Last year to include (e.g. 2021).
    #[clap(long)]
    pub to: Option<Year>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum QueryCmd {
    /// National time series, one row per year.
    National {
        #[clap(flatten)]
        filter: YearFilter,
    },

    /// Breakdown by firm-age bucket.
    FirmAge {
        #[clap(flatten)]
        filter: YearFilter,

        /// Restrict to one FAGE code (10 = startups).
        #[clap(long)]
        fage: Option<i64>,
    },

    /// Breakdown by state.
    State {
        #[clap(flatten)]
        filter: YearFilter,

        /// Restrict to one state FIPS code (e.g. 6 for California).
        #[clap(long)]
        state: Option<i64>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "bds-pipeline",
    about = "Census Business Dynamics Statistics ETL pipeline"
)]
pub struct Bds {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run extract, transform and load in sequence.
    Run,

    /// Fetch all datasets from the Census API into raw CSV artifacts.
    Extract,

    /// Clean and enrich the raw artifacts into clean CSV artifacts.
    Transform,

    /// Replace the SQLite tables with the clean artifacts.
    Load,

    /// Read rows back from the loaded store.
    Query {
        #[clap(subcommand)]
        cmd: QueryCmd,
    },
}
