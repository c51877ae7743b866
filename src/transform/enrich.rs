use crate::core::columns::{RateSpec, FAGE, FIRM_AGE_LABEL, RATES, STATE, STATE_NAME};
use crate::core::table::{Cell, Table};
use crate::transform::lookup::{firm_age_label, state_name};


/// `numerator / denominator * 100` rounded to 2 decimals, ties to even.
///
/// Missing when either side is missing or the denominator is zero.
pub fn rate(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (num, den) = (numerator?, denominator?);
    if den == 0.0 {
        return None;
    }
    let pct = num / den * 100.0;
    pct.is_finite().then(|| round2(pct))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Add one rate column, if both source columns are present.
pub fn add_rate(table: &mut Table, spec: &RateSpec) -> bool {
    let (Some(num_idx), Some(den_idx)) = (
        table.column_index(spec.numerator),
        table.column_index(spec.denominator),
    ) else {
        return false;
    };

    table.derive_column(spec.name, |t, i| {
        let row = &t.rows()[i];
        Cell::from(rate(row[num_idx].as_f64(), row[den_idx].as_f64()))
    });
    true
}

/// Add every standard rate whose source columns are present.
pub fn calculate_rates(table: &Table) -> Table {
    let mut out = table.clone();
    for spec in &RATES {
        add_rate(&mut out, spec);
    }
    out
}

/// Attach FIRM_AGE_LABEL from the FAGE code.
pub fn add_firm_age_labels(table: &mut Table) {
    add_label(table, FAGE, FIRM_AGE_LABEL, firm_age_label);
}

/// Attach STATE_NAME from the FIPS code.
pub fn add_state_names(table: &mut Table) {
    add_label(table, STATE, STATE_NAME, state_name);
}

fn add_label(
    table: &mut Table,
    code_column: &str,
    label_column: &str,
    resolve: fn(i64) -> Option<&'static str>,
) {
    let Some(code_idx) = table.column_index(code_column) else {
        return;
    };
    table.derive_column(label_column, |t, i| {
        let code = t.rows()[i][code_idx].as_i64();
        Cell::from(code.and_then(resolve))
    });
}
