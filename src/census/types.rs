use std::fmt;

use crate::core::columns::{FAGE, METRIC_COLUMNS, STATE, US, YEAR};
use crate::core::table::{Cell, Table};
use crate::error::{BdsError, Result};


/// The three shapes of BDS data the pipeline extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Nation-wide time series, one row per year.
    National,
    /// Nation-wide, broken down by firm-age bucket.
    ByFirmAge,
    /// Per-state time series.
    ByState,
}

impl Dataset {
    /// All shapes, in extraction order.
    pub const ALL: [Dataset; 3] = [Dataset::National, Dataset::ByFirmAge, Dataset::ByState];

    /// Name used for artifacts and store tables.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::National => "national",
            Dataset::ByFirmAge => "by_firm_age",
            Dataset::ByState => "by_state",
        }
    }

    /// `get` parameter: the metric list, plus FAGE for the firm-age breakdown.
    pub fn get_param(&self) -> String {
        let mut vars: Vec<&str> = METRIC_COLUMNS.to_vec();
        if *self == Dataset::ByFirmAge {
            vars.push(FAGE);
        }
        vars.join(",")
    }

    /// `for` parameter selecting the geographic grouping.
    pub fn geography(&self) -> &'static str {
        match self {
            Dataset::National | Dataset::ByFirmAge => "us:*",
            Dataset::ByState => "state:*",
        }
    }

    /// Geography column the API appends to each row.
    pub fn geography_column(&self) -> &'static str {
        match self {
            Dataset::National | Dataset::ByFirmAge => US,
            Dataset::ByState => STATE,
        }
    }

    /// Columns a well-formed response must carry.
    pub fn required_columns(&self) -> Vec<&'static str> {
        let mut cols: Vec<&'static str> = METRIC_COLUMNS.to_vec();
        if *self == Dataset::ByFirmAge {
            cols.push(FAGE);
        }
        cols.push(YEAR);
        cols.push(self.geography_column());
        cols
    }

    /// Sort order of the final table.
    pub fn sort_keys(&self) -> &'static [&'static str] {
        match self {
            Dataset::National => &[YEAR],
            Dataset::ByFirmAge => &[YEAR, FAGE],
            Dataset::ByState => &[YEAR, STATE],
        }
    }

    /// Category column indexed alongside YEAR, if any.
    pub fn category_column(&self) -> Option<&'static str> {
        match self {
            Dataset::National => None,
            Dataset::ByFirmAge => Some(FAGE),
            Dataset::ByState => Some(STATE),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert a decoded API payload into a text table.
///
/// The payload is a JSON array whose first element is the header row; every
/// following element is a data row of the same width.
pub fn payload_to_table(dataset: Dataset, payload: Vec<Vec<Option<String>>>) -> Result<Table> {
    let malformed = |reason: String| BdsError::MalformedPayload { dataset, reason };

    let mut rows = payload.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| malformed("empty response, expected a header row".to_string()))?;

    let columns: Vec<String> = header
        .into_iter()
        .enumerate()
        .map(|(i, name)| match name {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(malformed(format!("header column {i} is empty"))),
        })
        .collect::<Result<_>>()?;

    for required in dataset.required_columns() {
        if !columns.iter().any(|c| c == required) {
            return Err(malformed(format!("missing column {required}")));
        }
    }

    let width = columns.len();
    let mut table = Table::new(columns);
    for (i, row) in rows.enumerate() {
        if row.len() != width {
            return Err(malformed(format!(
                "row {} has {} cells, header has {width}",
                i + 1,
                row.len()
            )));
        }
        table.push_row(
            row.into_iter()
                .map(|cell| Cell::Text(cell.unwrap_or_default()))
                .collect(),
        );
    }

    Ok(table)
}
