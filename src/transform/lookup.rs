//! Static code-to-label tables.

/// FAGE code of newly formed firms (age 0).
pub const FAGE_STARTUPS: i64 = 10;

/// Firm-age bucket labels keyed by FAGE code.
pub const FIRM_AGE_LABELS: [(i64, &str); 15] = [
    (1, "Total"),
    (10, "0 (Startups)"),
    (20, "1 year"),
    (30, "2 years"),
    (40, "3 years"),
    (50, "4 years"),
    (60, "5 years"),
    (65, "1-5 years"),
    (70, "6-10 years"),
    (75, "11+ years"),
    (80, "11-15 years"),
    (90, "16-20 years"),
    (100, "21-25 years"),
    (110, "26+ years"),
    (150, "Left Censored"),
];

/// The 50 states plus the District of Columbia, keyed by FIPS code.
pub const STATE_FIPS: [(i64, &str); 51] = [
    (1, "Alabama"),
    (2, "Alaska"),
    (4, "Arizona"),
    (5, "Arkansas"),
    (6, "California"),
    (8, "Colorado"),
    (9, "Connecticut"),
    (10, "Delaware"),
    (11, "District of Columbia"),
    (12, "Florida"),
    (13, "Georgia"),
    (15, "Hawaii"),
    (16, "Idaho"),
    (17, "Illinois"),
    (18, "Indiana"),
    (19, "Iowa"),
    (20, "Kansas"),
    (21, "Kentucky"),
    (22, "Louisiana"),
    (23, "Maine"),
    (24, "Maryland"),
    (25, "Massachusetts"),
    (26, "Michigan"),
    (27, "Minnesota"),
    (28, "Mississippi"),
    (29, "Missouri"),
    (30, "Montana"),
    (31, "Nebraska"),
    (32, "Nevada"),
    (33, "New Hampshire"),
    (34, "New Jersey"),
    (35, "New Mexico"),
    (36, "New York"),
    (37, "North Carolina"),
    (38, "North Dakota"),
    (39, "Ohio"),
    (40, "Oklahoma"),
    (41, "Oregon"),
    (42, "Pennsylvania"),
    (44, "Rhode Island"),
    (45, "South Carolina"),
    (46, "South Dakota"),
    (47, "Tennessee"),
    (48, "Texas"),
    (49, "Utah"),
    (50, "Vermont"),
    (51, "Virginia"),
    (53, "Washington"),
    (54, "West Virginia"),
    (55, "Wisconsin"),
    (56, "Wyoming"),
];

fn lookup(table: &'static [(i64, &'static str)], code: i64) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

pub fn firm_age_label(code: i64) -> Option<&'static str> {
    lookup(&FIRM_AGE_LABELS, code)
}

pub fn state_name(fips: i64) -> Option<&'static str> {
    lookup(&STATE_FIPS, fips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firm_age_labels() {
        assert_eq!(firm_age_label(FAGE_STARTUPS), Some("0 (Startups)"));
        assert_eq!(firm_age_label(1), Some("Total"));
        assert_eq!(firm_age_label(150), Some("Left Censored"));
        assert_eq!(firm_age_label(999), None);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(state_name(6), Some("California"));
        assert_eq!(state_name(11), Some("District of Columbia"));
        assert_eq!(state_name(56), Some("Wyoming"));
        // Territories and unused codes are not in the table
        assert_eq!(state_name(3), None);
        assert_eq!(state_name(60), None);
        assert_eq!(state_name(72), None);
    }

    #[test]
    fn test_lookup_tables_have_unique_codes() {
        let mut codes: Vec<i64> = STATE_FIPS.iter().map(|(c, _)| *c).collect();
        codes.dedup();
        assert_eq!(codes.len(), 51);

        let mut ages: Vec<i64> = FIRM_AGE_LABELS.iter().map(|(c, _)| *c).collect();
        ages.dedup();
        assert_eq!(ages.len(), FIRM_AGE_LABELS.len());
    }
}
