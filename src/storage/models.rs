//! Data models for the storage layer

use crate::census::types::Dataset;

/// What one table looked like after a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLoad {
    pub dataset: Dataset,
    pub rows: usize,
    pub indexes: Vec<String>,
}

/// Verified result of a full load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    pub fn rows_for(&self, dataset: Dataset) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.dataset == dataset)
            .map(|t| t.rows)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }
}
