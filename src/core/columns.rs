//! Column names and their storage kinds.

/// Metric variables requested from the API for every dataset shape.
pub const METRIC_COLUMNS: [&str; 9] = [
    "FIRM",             // Number of firms
    "ESTAB",            // Number of establishments
    "EMP",              // Employment
    "FIRMDEATH_FIRMS",  // Firm deaths
    "ESTABS_ENTRY",     // Establishment entries
    "ESTABS_EXIT",      // Establishment exits
    "JOB_CREATION",     // Gross job creation
    "JOB_DESTRUCTION",  // Gross job destruction
    "NET_JOB_CREATION", // Net job creation
];

pub const YEAR: &str = "YEAR";
pub const FAGE: &str = "FAGE";
pub const STATE: &str = "state";
/// Geography column the API appends to nation-wide queries.
pub const US: &str = "us";

pub const FIRM: &str = "FIRM";
pub const FIRM_BIRTHS: &str = "FIRM_BIRTHS";
pub const FIRM_BIRTH_RATE: &str = "FIRM_BIRTH_RATE";
pub const FIRM_AGE_LABEL: &str = "FIRM_AGE_LABEL";
pub const STATE_NAME: &str = "STATE_NAME";

/// Columns the cleaner coerces to numbers.
pub const NUMERIC_COLUMNS: [&str; 12] = [
    "FIRM",
    "ESTAB",
    "EMP",
    "FIRMDEATH_FIRMS",
    "ESTABS_ENTRY",
    "ESTABS_EXIT",
    "JOB_CREATION",
    "JOB_DESTRUCTION",
    "NET_JOB_CREATION",
    YEAR,
    FAGE,
    STATE,
];

/// A derived percentage: `numerator / denominator * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSpec {
    pub name: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
}

pub const RATES: [RateSpec; 5] = [
    RateSpec {
        name: "STARTUP_RATE",
        numerator: "ESTABS_ENTRY",
        denominator: "ESTAB",
    },
    RateSpec {
        name: "EXIT_RATE",
        numerator: "ESTABS_EXIT",
        denominator: "ESTAB",
    },
    RateSpec {
        name: "JOB_CREATION_RATE",
        numerator: "JOB_CREATION",
        denominator: "EMP",
    },
    RateSpec {
        name: "JOB_DESTRUCTION_RATE",
        numerator: "JOB_DESTRUCTION",
        denominator: "EMP",
    },
    RateSpec {
        name: "FIRM_DEATH_RATE",
        numerator: "FIRMDEATH_FIRMS",
        denominator: "FIRM",
    },
];

pub const FIRM_BIRTH_RATE_SPEC: RateSpec = RateSpec {
    name: FIRM_BIRTH_RATE,
    numerator: FIRM_BIRTHS,
    denominator: FIRM,
};

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "INTEGER",
            ColumnKind::Real => "REAL",
            ColumnKind::Text => "TEXT",
        }
    }
}

/// Fixed kind for a known column, `None` for anything else.
pub fn known_kind(name: &str) -> Option<ColumnKind> {
    if NUMERIC_COLUMNS.contains(&name) || name == FIRM_BIRTHS {
        Some(ColumnKind::Integer)
    } else if name == FIRM_BIRTH_RATE || RATES.iter().any(|r| r.name == name) {
        Some(ColumnKind::Real)
    } else if name == FIRM_AGE_LABEL || name == STATE_NAME {
        Some(ColumnKind::Text)
    } else {
        None
    }
}
