//! Error types for the BDS pipeline

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::census::types::Dataset;


pub type Result<T> = std::result::Result<T, BdsError>;

/// Pipeline stage a structural failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Extract,
    Transform,
    Load,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extract => "extract",
            Stage::Transform => "transform",
            Stage::Load => "load",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug)]
pub enum BdsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Census API returned status {status} for the {dataset} dataset")]
    ApiStatus { dataset: Dataset, status: u16 },

    #[error("Malformed {dataset} payload: {reason}")]
    MalformedPayload { dataset: Dataset, reason: String },

    #[error("Missing artifact {}; run the {stage} stage first", path.display())]
    MissingArtifact { path: PathBuf, stage: Stage },

    #[error("Could not determine a data directory; set {env_var}")]
    DataDir { env_var: String },

    #[error("Table '{table}' has no columns to store")]
    EmptySchema { table: String },

    #[error("Row count mismatch in table '{table}': wrote {expected}, found {actual}")]
    LoadVerification {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("No BDS store at {}: the pipeline has not been run yet", path.display())]
    StoreMissing { path: PathBuf },

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<BdsError>,
    },
}

impl BdsError {
    /// Tag an error with the stage that produced it.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            already @ BdsError::Stage { .. } => already,
            other => BdsError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// Whether re-running the pipeline may succeed.
    ///
    /// Network failures are transient; a load verification failure means the
    /// store may be inconsistent and the run must be repeated.
    pub fn is_retryable(&self) -> bool {
        match self {
            BdsError::Http(_) | BdsError::LoadVerification { .. } => true,
            BdsError::ApiStatus { status, .. } => *status >= 500,
            BdsError::Stage { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// True when the store has not been created yet.
    pub fn is_store_missing(&self) -> bool {
        match self {
            BdsError::StoreMissing { .. } => true,
            BdsError::Stage { source, .. } => source.is_store_missing(),
            _ => false,
        }
    }
}
