//! Firm births: the age-0 rows of the firm-age table joined onto national.

use std::collections::BTreeMap;

use tracing::warn;

use crate::core::columns::{FAGE, FIRM, FIRM_BIRTHS, FIRM_BIRTH_RATE_SPEC, YEAR};
use crate::core::table::{Cell, Table};
use crate::transform::{enrich::add_rate, lookup::FAGE_STARTUPS};

/// Firm-birth counts keyed by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FirmBirths {
    pub by_year: BTreeMap<i64, Cell>,
    /// Years with more than one age-0 row; only the first row was kept.
    pub duplicate_years: Vec<i64>,
}

/// Outcome of joining births onto the national table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BirthJoinReport {
    pub matched: usize,
    /// National years with no age-0 row.
    pub unmatched_years: Vec<i64>,
    pub duplicate_years: Vec<i64>,
}

impl BirthJoinReport {
    pub fn has_integrity_issues(&self) -> bool {
        !self.duplicate_years.is_empty()
    }
}

/// Project the age-0 rows of a cleaned firm-age table to (YEAR, FIRM_BIRTHS).
///
/// The source guarantees one age-0 row per year. When that is violated the
/// first row in source order wins and the year is reported, never summed.
pub fn extract_firm_births(firm_age: &Table) -> FirmBirths {
    let mut births = FirmBirths::default();
    let (Some(year_idx), Some(fage_idx), Some(firm_idx)) = (
        firm_age.column_index(YEAR),
        firm_age.column_index(FAGE),
        firm_age.column_index(FIRM),
    ) else {
        return births;
    };

    for row in firm_age.rows() {
        if row[fage_idx].as_i64() != Some(FAGE_STARTUPS) {
            continue;
        }
        let Some(year) = row[year_idx].as_i64() else {
            continue;
        };
        if births.by_year.contains_key(&year) {
            if !births.duplicate_years.contains(&year) {
                births.duplicate_years.push(year);
            }
            continue;
        }
        births.by_year.insert(year, row[firm_idx].clone());
    }

    for year in &births.duplicate_years {
        warn!(
            year,
            "data integrity: multiple age-0 firm rows for one year; keeping the first"
        );
    }
    births
}

/// Left-join firm births onto the national table and add FIRM_BIRTH_RATE.
pub fn add_firm_birth_rate(national: &Table, firm_age: &Table) -> (Table, BirthJoinReport) {
    let births = extract_firm_births(firm_age);
    let mut out = national.clone();
    let mut report = BirthJoinReport {
        duplicate_years: births.duplicate_years.clone(),
        ..Default::default()
    };

    let year_idx = out.column_index(YEAR);
    let values: Vec<Cell> = out
        .rows()
        .iter()
        .map(|row| {
            let year = year_idx.and_then(|i| row[i].as_i64());
            match year.and_then(|y| births.by_year.get(&y)) {
                Some(count) => {
                    report.matched += 1;
                    count.clone()
                }
                None => {
                    if let Some(y) = year {
                        report.unmatched_years.push(y);
                    }
                    Cell::Null
                }
            }
        })
        .collect();
    out.set_column(FIRM_BIRTHS, values);
    add_rate(&mut out, &FIRM_BIRTH_RATE_SPEC);

    if !report.unmatched_years.is_empty() {
        warn!(
            years = ?report.unmatched_years,
            "national years without firm-age startup data"
        );
    }

    (out, report)
}
