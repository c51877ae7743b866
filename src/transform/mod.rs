//! Cleaning and enrichment of raw BDS tables
//!
//! - `clean`: numeric coercion with suppression handling
//! - `enrich`: derived rates and categorical labels
//! - `lookup`: static FAGE and FIPS tables
//! - `join`: firm births from the firm-age table onto national

pub mod clean;
pub mod enrich;
pub mod join;
pub mod lookup;

use tracing::info;

use crate::census::types::Dataset;
use crate::core::columns::US;
use crate::core::table::Table;

pub use clean::clean_numeric_columns;
pub use enrich::{add_firm_age_labels, add_state_names, calculate_rates, rate};
pub use join::{add_firm_birth_rate, extract_firm_births, BirthJoinReport};

/// The three tables handed to the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalTables {
    pub national: Table,
    pub by_firm_age: Table,
    pub by_state: Table,
}

impl FinalTables {
    pub fn get(&self, dataset: Dataset) -> &Table {
        match dataset {
            Dataset::National => &self.national,
            Dataset::ByFirmAge => &self.by_firm_age,
            Dataset::ByState => &self.by_state,
        }
    }
}

/// Raw firm-age table to its final form. Expects cleaned or raw input.
pub fn transform_by_firm_age(raw: &Table) -> Table {
    let mut df = calculate_rates(&clean_numeric_columns(raw));
    add_firm_age_labels(&mut df);
    df.sort_by_columns(Dataset::ByFirmAge.sort_keys());
    df.drop_column(US);
    info!(rows = df.len(), "transformed firm age data");
    df
}

/// Raw national table to its final form, including firm births.
///
/// `firm_age` must be the cleaned, pre-label firm-age table.
pub fn transform_national(raw: &Table, firm_age: &Table) -> (Table, BirthJoinReport) {
    let mut df = calculate_rates(&clean_numeric_columns(raw));
    df.sort_by_columns(Dataset::National.sort_keys());
    df.drop_column(US);
    let (df, report) = add_firm_birth_rate(&df, firm_age);
    info!(
        rows = df.len(),
        births_matched = report.matched,
        "transformed national data"
    );
    (df, report)
}

/// Raw by-state table to its final form.
pub fn transform_by_state(raw: &Table) -> Table {
    let mut df = calculate_rates(&clean_numeric_columns(raw));
    add_state_names(&mut df);
    df.sort_by_columns(Dataset::ByState.sort_keys());
    info!(rows = df.len(), "transformed state data");
    df
}

/// Transform all three raw tables. Firm age goes first because national
/// depends on its cleaned form.
pub fn transform_all(
    raw_national: &Table,
    raw_firm_age: &Table,
    raw_state: &Table,
) -> (FinalTables, BirthJoinReport) {
    let cleaned_firm_age = clean_numeric_columns(raw_firm_age);
    let by_firm_age = transform_by_firm_age(&cleaned_firm_age);
    let (national, report) = transform_national(raw_national, &cleaned_firm_age);
    let by_state = transform_by_state(raw_state);

    (
        FinalTables {
            national,
            by_firm_age,
            by_state,
        },
        report,
    )
}
