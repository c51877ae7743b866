//! Full-refresh loading of the three BDS tables.
//!
//! Each table is written to a staging table and swapped in place of the old
//! one inside a single transaction, so readers see either the previous load
//! or the new one.

use rusqlite::{params_from_iter, Connection};
use tracing::{debug, info};

use super::models::{LoadReport, TableLoad};
use super::schema::{quote_ident, BdsDatabase};
use crate::census::types::Dataset;
use crate::core::columns::{known_kind, ColumnKind, YEAR};
use crate::core::table::{Cell, Table};
use crate::error::{BdsError, Result};
use crate::transform::FinalTables;

/// Index definition: (name, table, column, unique).
pub type IndexDef = (&'static str, &'static str, &'static str, bool);

/// Secondary indexes for the presentation layer's query patterns.
pub fn index_defs(dataset: Dataset) -> &'static [IndexDef] {
    match dataset {
        Dataset::National => &[("idx_national_year", "national", YEAR, true)],
        Dataset::ByFirmAge => &[
            ("idx_firm_age_year", "by_firm_age", YEAR, false),
            ("idx_firm_age_fage", "by_firm_age", "FAGE", false),
        ],
        Dataset::ByState => &[
            ("idx_state_year", "by_state", YEAR, false),
            ("idx_state_state", "by_state", "state", false),
        ],
    }
}

impl BdsDatabase {
    /// Replace all three tables, build indexes and verify row counts.
    ///
    /// A row-count mismatch after commit is a [`BdsError::LoadVerification`];
    /// the caller should treat the run as failed and re-run it.
    pub fn load_all(&mut self, tables: &FinalTables) -> Result<LoadReport> {
        let tx = self.conn.transaction()?;
        for dataset in Dataset::ALL {
            replace_table(&tx, dataset, tables.get(dataset))?;
        }
        tx.commit()?;

        let mut report = LoadReport::default();
        for dataset in Dataset::ALL {
            let expected = tables.get(dataset).len();
            let actual = count_rows(&self.conn, dataset.name())?;
            if actual != expected {
                return Err(BdsError::LoadVerification {
                    table: dataset.name().to_string(),
                    expected,
                    actual,
                });
            }
            info!(table = dataset.name(), rows = actual, "verified table");
            report.tables.push(TableLoad {
                dataset,
                rows: actual,
                indexes: index_names(&self.conn, dataset.name())?,
            });
        }
        Ok(report)
    }

    /// Rows currently stored in `table`.
    pub fn row_count(&self, table: &str) -> Result<usize> {
        count_rows(&self.conn, table)
    }

    /// Names of the explicitly created indexes on `table`.
    pub fn index_names(&self, table: &str) -> Result<Vec<String>> {
        index_names(&self.conn, table)
    }
}

fn replace_table(conn: &Connection, dataset: Dataset, table: &Table) -> Result<()> {
    let name = dataset.name();
    if table.columns().is_empty() {
        return Err(BdsError::EmptySchema {
            table: name.to_string(),
        });
    }

    let target = quote_ident(name);
    let staging = quote_ident(&format!("{name}__staging"));

    let column_defs = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} {}", quote_ident(col), column_kind(table, i).sql_type()))
        .collect::<Vec<_>>()
        .join(", ");

    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS {staging};
         CREATE TABLE {staging} ({column_defs});"
    ))?;

    let column_list = table
        .columns()
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=table.columns().len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    {
        let mut stmt = conn.prepare(&format!(
            "INSERT INTO {staging} ({column_list}) VALUES ({placeholders})"
        ))?;
        for row in table.rows() {
            stmt.execute(params_from_iter(row.iter()))?;
        }
    }

    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS {target};
         ALTER TABLE {staging} RENAME TO {target};"
    ))?;

    for (index, on_table, column, unique) in index_defs(dataset) {
        if !table.has_column(column) {
            continue;
        }
        let unique = if *unique { "UNIQUE " } else { "" };
        conn.execute(
            &format!(
                "CREATE {unique}INDEX IF NOT EXISTS {} ON {}({})",
                quote_ident(index),
                quote_ident(on_table),
                quote_ident(column)
            ),
            [],
        )?;
    }

    info!(table = name, rows = table.len(), "loaded table");
    Ok(())
}

/// Declared SQL kind: the fixed kind for known columns, else inferred.
fn column_kind(table: &Table, idx: usize) -> ColumnKind {
    if let Some(kind) = known_kind(&table.columns()[idx]) {
        return kind;
    }
    let mut kind = ColumnKind::Integer;
    for row in table.rows() {
        match &row[idx] {
            Cell::Null | Cell::Int(_) => {}
            Cell::Real(_) => kind = ColumnKind::Real,
            Cell::Text(_) => return ColumnKind::Text,
        }
    }
    kind
}

fn count_rows(conn: &Connection, table: &str) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
        [],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

fn index_names(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'index' AND tbl_name = ? AND sql IS NOT NULL
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    debug!(table, indexes = ?names, "listed indexes");
    Ok(names)
}
