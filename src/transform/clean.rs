use crate::core::columns::NUMERIC_COLUMNS;
use crate::core::table::{Cell, Table};

/// Coerce the designated numeric columns that are present in `table`.
///
/// Suppression markers and any other unparseable text become missing values.
/// Cells that are already numeric or missing are left as they are, so
/// cleaning twice is the same as cleaning once.
pub fn clean_numeric_columns(table: &Table) -> Table {
    let mut out = table.clone();
    for col in NUMERIC_COLUMNS {
        out.map_column(col, coerce);
    }
    out
}

fn coerce(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::parse_number(s),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(v: &str) -> Cell {
        Cell::Text(v.to_string())
    }

    fn raw_table() -> Table {
        Table::from_rows(
            vec!["FIRM".into(), "EMP".into(), "YEAR".into(), "FAGE".into(), "us".into()],
            vec![
                vec![text("450000"), text("D"), text("2021"), text("010"), text("1")],
                vec![text(""), text("S"), text("2021"), text("020"), text("1")],
                vec![text("12.5"), text("X"), text("2022"), text("150"), text("1")],
                vec![text("N"), text("inf"), text("2022"), text("abc"), text("1")],
            ],
        )
    }

    #[test]
    fn test_numeric_columns_are_coerced() {
        let cleaned = clean_numeric_columns(&raw_table());

        assert_eq!(cleaned.get(0, "FIRM"), Some(&Cell::Int(450000)));
        assert_eq!(cleaned.get(0, "FAGE"), Some(&Cell::Int(10)));
        assert_eq!(cleaned.get(2, "FIRM"), Some(&Cell::Real(12.5)));
        assert_eq!(cleaned.get(2, "YEAR"), Some(&Cell::Int(2022)));
    }

    #[test]
    fn test_suppression_codes_become_missing() {
        let cleaned = clean_numeric_columns(&raw_table());

        for row in 0..4 {
            assert!(cleaned.get(row, "EMP").unwrap().is_null());
        }
        assert!(cleaned.get(1, "FIRM").unwrap().is_null());
        assert!(cleaned.get(3, "FIRM").unwrap().is_null());
        assert!(cleaned.get(3, "FAGE").unwrap().is_null());
    }

    #[test]
    fn test_other_columns_pass_through() {
        let cleaned = clean_numeric_columns(&raw_table());
        assert_eq!(cleaned.get(0, "us"), Some(&text("1")));
        assert_eq!(cleaned.columns(), raw_table().columns());
        assert_eq!(cleaned.len(), 4);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let once = clean_numeric_columns(&raw_table());
        let twice = clean_numeric_columns(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_absent_columns_are_ignored() {
        let table = Table::from_rows(vec!["NAME".into()], vec![vec![text("D")]]);
        assert_eq!(clean_numeric_columns(&table), table);
    }
}
