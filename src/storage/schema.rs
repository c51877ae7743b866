//! Database connection management

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::census::types::Dataset;
use crate::error::{BdsError, Result};

/// Connection to the BDS store.
#[derive(Debug)]
pub struct BdsDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl BdsDatabase {
    /// Open (creating if needed) the store for writing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened store");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an existing, fully loaded store for reading.
    ///
    /// A missing file, or one without all three tables, means the pipeline
    /// has not been run yet and yields [`BdsError::StoreMissing`].
    pub fn open_existing(path: &Path) -> Result<Self> {
        let missing = || BdsError::StoreMissing {
            path: path.to_path_buf(),
        };
        if !path.is_file() {
            return Err(missing());
        }

        let db = Self::open(path)?;
        for dataset in Dataset::ALL {
            if !db.table_exists(dataset.name())? {
                return Err(missing());
            }
        }
        Ok(db)
    }

    /// Create an in-memory store (for testing).
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let found: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                [name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

/// Quote an identifier for SQLite.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("YEAR"), "\"YEAR\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_open_existing_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = BdsDatabase::open_existing(&dir.path().join("bds.db"));
        assert!(matches!(result, Err(BdsError::StoreMissing { .. })));
    }

    #[test]
    fn test_open_existing_without_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bds.db");
        BdsDatabase::open(&path).unwrap();

        let result = BdsDatabase::open_existing(&path);
        assert!(matches!(result, Err(BdsError::StoreMissing { .. })));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("bds.db");
        let db = BdsDatabase::open(&path).unwrap();
        assert_eq!(db.path(), Some(path.as_path()));
        assert!(path.exists());
    }
}
