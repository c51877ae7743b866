//! Read-side queries used by the presentation layer

use anyhow::{Context, Result};
use rusqlite::params;

use super::schema::{quote_ident, BdsDatabase};
use crate::census::types::Dataset;
use crate::cli::types::{Year, YearRange};
use crate::core::table::{Cell, Table};

impl BdsDatabase {
    /// Earliest and latest year in the national table.
    pub fn year_bounds(&self) -> Result<Option<(Year, Year)>> {
        let (min, max): (Option<i64>, Option<i64>) = self
            .conn
            .query_row("SELECT MIN(YEAR), MAX(YEAR) FROM national", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .context("reading year bounds")?;

        match (min, max) {
            (Some(lo), Some(hi)) => Ok(Some((
                Year::new(u16::try_from(lo).context("year out of range")?),
                Year::new(u16::try_from(hi).context("year out of range")?),
            ))),
            _ => Ok(None),
        }
    }

    /// Rows of `dataset` within `range`, optionally restricted to one
    /// category code (FAGE or state), in the table's natural order.
    pub fn select(&self, dataset: Dataset, range: YearRange, code: Option<i64>) -> Result<Table> {
        let mut sql = format!(
            "SELECT * FROM {} WHERE YEAR BETWEEN ?1 AND ?2",
            quote_ident(dataset.name())
        );
        if let (Some(column), Some(_)) = (dataset.category_column(), code) {
            sql.push_str(&format!(" AND {} = ?3", quote_ident(column)));
        }
        let order = dataset
            .sort_keys()
            .iter()
            .map(|k| quote_ident(k))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(&format!(" ORDER BY {order}"));

        let mut stmt = self
            .conn
            .prepare(&sql)
            .with_context(|| format!("preparing select on {dataset}"))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();

        let (lo, hi) = range.bounds();
        let mut rows = match (dataset.category_column(), code) {
            (Some(_), Some(code)) => stmt.query(params![lo, hi, code])?,
            _ => stmt.query(params![lo, hi])?,
        };

        let mut table = Table::new(columns);
        while let Some(row) = rows.next()? {
            let cells = (0..width)
                .map(|i| row.get_ref(i).map(Cell::from))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            table.push_row(cells);
        }
        Ok(table)
    }

    pub fn national(&self, range: YearRange) -> Result<Table> {
        self.select(Dataset::National, range, None)
    }

    pub fn by_firm_age(&self, range: YearRange, fage: Option<i64>) -> Result<Table> {
        self.select(Dataset::ByFirmAge, range, fage)
    }

    pub fn by_state(&self, range: YearRange, state: Option<i64>) -> Result<Table> {
        self.select(Dataset::ByState, range, state)
    }
}
