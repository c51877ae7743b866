//! Runtime configuration resolved from the environment.

use std::path::{Path, PathBuf};

use crate::census::types::Dataset;
use crate::error::{BdsError, Result};
use crate::{API_KEY_ENV_VAR, API_URL_ENV_VAR, DATA_DIR_ENV_VAR, DB_PATH_ENV_VAR};

/// Census BDS timeseries endpoint.
pub const BDS_BASE_URL: &str = "https://api.census.gov/data/timeseries/bds";

/// File name of the store inside the data directory.
pub const DATABASE_FILE: &str = "bds.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding raw and clean CSV artifacts.
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub api_base_url: String,
    pub api_key: Option<String>,
}

impl Config {
    /// Resolve configuration from `BDS_*` / `CENSUS_API_KEY` variables.
    pub fn from_env() -> Result<Self> {
        let data_dir = match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        let db_path = std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE));
        let api_base_url = std::env::var(API_URL_ENV_VAR)
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| BDS_BASE_URL.to_string());
        let api_key = std::env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty());

        Ok(Self {
            data_dir,
            db_path,
            api_base_url,
            api_key,
        })
    }

    /// Configuration rooted at an explicit directory, talking to `api_base_url`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>, api_base_url: impl Into<String>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            db_path: data_dir.join(DATABASE_FILE),
            data_dir,
            api_base_url: api_base_url.into(),
            api_key: None,
        }
    }

    /// Path: {data_dir}/raw_{dataset}.csv
    pub fn raw_path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(format!("raw_{}.csv", dataset.name()))
    }

    /// Path: {data_dir}/clean_{dataset}.csv
    pub fn clean_path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(format!("clean_{}.csv", dataset.name()))
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
        .ok_or_else(|| BdsError::DataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        })?;
    Ok(base.join("bds-pipeline"))
}
