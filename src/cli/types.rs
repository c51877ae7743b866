//! Strongly-typed values accepted on the command line.

use crate::error::{BdsError, Result};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a statistics year.
///
/// # Examples
///
/// ```rust
/// use bds_pipeline::Year;
///
/// let year: Year = "2021".parse().unwrap();
/// assert_eq!(year.as_i64(), 2021);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = BdsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive year range; an open end means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearRange {
    pub from: Option<Year>,
    pub to: Option<Year>,
}

impl YearRange {
    pub fn new(from: Option<Year>, to: Option<Year>) -> Self {
        Self { from, to }
    }

    /// Everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Inclusive bounds for a `BETWEEN` clause.
    pub fn bounds(&self) -> (i64, i64) {
        (
            self.from.map(|y| y.as_i64()).unwrap_or(i64::MIN),
            self.to.map(|y| y.as_i64()).unwrap_or(i64::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parse() {
        assert_eq!("1978".parse::<Year>().unwrap(), Year::new(1978));
        assert_eq!(" 2021 ".parse::<Year>().unwrap().as_i64(), 2021);
        assert!(matches!(
            "nineteen".parse::<Year>(),
            Err(BdsError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(2020).to_string(), "2020");
    }

    #[test]
    fn test_year_range_bounds() {
        let range = YearRange::new(Some(Year::new(2000)), Some(Year::new(2010)));
        assert_eq!(range.bounds(), (2000, 2010));
        assert_eq!(YearRange::all().bounds(), (i64::MIN, i64::MAX));
    }

    #[test]
    fn test_year_range_half_open() {
        let range = YearRange::new(Some(Year::new(2015)), None);
        assert_eq!(range.bounds(), (2015, i64::MAX));
    }
}
