//! CSV stage artifacts.
//!
//! Raw artifacts hold the API response verbatim (every cell is text). Clean
//! artifacts hold typed values; empty fields are missing values and known
//! columns are read back with their fixed kind.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::core::columns::{known_kind, ColumnKind};
use crate::core::table::{Cell, Table};
use crate::error::{BdsError, Result, Stage};

/// How cells are interpreted when reading an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Raw,
    Clean,
}

/// Write a table as CSV, creating parent directories.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(Cell::to_field))?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = table.len(), "wrote artifact");
    Ok(())
}

/// Replace a set of artifacts together.
///
/// Every table is first written beside its target as `<file>.tmp`; the
/// targets are only renamed into place once all writes succeeded, so a
/// failed write leaves the previous artifacts untouched.
pub fn write_tables(entries: &[(PathBuf, Table)]) -> Result<()> {
    let mut staged = Vec::with_capacity(entries.len());
    for (path, table) in entries {
        let tmp = staging_path(path);
        if let Err(e) = write_table(&tmp, table) {
            staged.push(tmp);
            for leftover in &staged {
                let _ = fs::remove_file(leftover);
            }
            return Err(e);
        }
        staged.push(tmp);
    }

    for (tmp, (path, _)) in staged.iter().zip(entries) {
        fs::rename(tmp, path)?;
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read a CSV artifact back into a table.
///
/// `producer` names the stage that writes this artifact, for the error raised
/// when it does not exist yet.
pub fn read_table(path: &Path, kind: ArtifactKind, producer: Stage) -> Result<Table> {
    if !path.exists() {
        return Err(BdsError::MissingArtifact {
            path: path.to_path_buf(),
            stage: producer,
        });
    }

    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let kinds: Vec<Option<ColumnKind>> = columns.iter().map(|c| known_kind(c)).collect();

    let mut table = Table::new(columns);
    for record in rdr.records() {
        let record = record?;
        let row = match kind {
            ArtifactKind::Raw => record.iter().map(|f| Cell::Text(f.to_string())).collect(),
            ArtifactKind::Clean => record
                .iter()
                .zip(&kinds)
                .map(|(field, col_kind)| parse_clean_field(field, *col_kind))
                .collect(),
        };
        table.push_row(row);
    }

    debug!(path = %path.display(), rows = table.len(), "read artifact");
    Ok(table)
}

fn parse_clean_field(field: &str, kind: Option<ColumnKind>) -> Cell {
    if field.is_empty() {
        return Cell::Null;
    }
    match kind {
        Some(ColumnKind::Integer) => Cell::parse_number(field),
        Some(ColumnKind::Real) => match Cell::parse_number(field) {
            Cell::Int(v) => Cell::Real(v as f64),
            other => other,
        },
        Some(ColumnKind::Text) => Cell::Text(field.to_string()),
        None => match Cell::parse_number(field) {
            Cell::Null => Cell::Text(field.to_string()),
            number => number,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_artifact_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw_national.csv");

        match read_table(&path, ArtifactKind::Raw, Stage::Extract) {
            Err(BdsError::MissingArtifact { stage, .. }) => assert_eq!(stage, Stage::Extract),
            other => panic!("Expected MissingArtifact, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_artifact_keeps_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("raw_by_state.csv");

        let table = Table::from_rows(
            cols(&["FIRM", "YEAR", "state"]),
            vec![vec![
                Cell::Text("D".to_string()),
                Cell::Text("2020".to_string()),
                Cell::Text("06".to_string()),
            ]],
        );
        write_table(&path, &table).unwrap();

        let back = read_table(&path, ArtifactKind::Raw, Stage::Extract).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_clean_artifact_restores_kinds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clean_national.csv");

        let table = Table::from_rows(
            cols(&["YEAR", "FIRM", "STARTUP_RATE", "STATE_NAME", "extra"]),
            vec![
                vec![
                    Cell::Int(2020),
                    Cell::Int(5000),
                    Cell::Real(10.0),
                    Cell::Text("Ohio".to_string()),
                    Cell::Text("x".to_string()),
                ],
                vec![Cell::Int(2021), Cell::Null, Cell::Null, Cell::Null, Cell::Int(3)],
            ],
        );
        write_table(&path, &table).unwrap();

        let back = read_table(&path, ArtifactKind::Clean, Stage::Transform).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_write_tables_replaces_all_targets() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("raw_national.csv");
        let second = dir.path().join("raw_by_state.csv");
        let table = |v: &str| Table::from_rows(cols(&["YEAR"]), vec![vec![Cell::Text(v.to_string())]]);

        write_table(&first, &table("1999")).unwrap();
        write_tables(&[(first.clone(), table("2021")), (second.clone(), table("2022"))]).unwrap();

        let read = |p: &Path| read_table(p, ArtifactKind::Raw, Stage::Extract).unwrap();
        assert_eq!(read(&first), table("2021"));
        assert_eq!(read(&second), table("2022"));
        assert!(!staging_path(&first).exists());
        assert!(!staging_path(&second).exists());
    }

    #[test]
    fn test_write_tables_failure_keeps_previous_artifacts() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("raw_national.csv");
        // A directory where the file should go makes the second write fail
        let blocked = dir.path().join("blocked.csv");
        fs::create_dir_all(staging_path(&blocked)).unwrap();
        let table = |v: &str| Table::from_rows(cols(&["YEAR"]), vec![vec![Cell::Text(v.to_string())]]);

        write_table(&good, &table("1999")).unwrap();
        let result = write_tables(&[(good.clone(), table("2021")), (blocked.clone(), table("2022"))]);

        assert!(result.is_err());
        assert_eq!(
            read_table(&good, ArtifactKind::Raw, Stage::Extract).unwrap(),
            table("1999")
        );
        assert!(!staging_path(&good).exists());
        assert!(!blocked.exists());
    }

    #[test]
    fn test_clean_real_column_read_from_integral_text() {
        assert_eq!(
            parse_clean_field("10", Some(ColumnKind::Real)),
            Cell::Real(10.0)
        );
        assert_eq!(parse_clean_field("", Some(ColumnKind::Text)), Cell::Null);
    }
}
