//! Year-month timestamp with monthly arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A point on the monthly grid: a year and a calendar month.
///
/// Ordering is chronological. Displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Months elapsed since January of year 0.
    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + self.month.index() as i64
    }

    fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal.div_euclid(12) as i32;
        let month = Month::ALL[ordinal.rem_euclid(12) as usize];
        Self { year, month }
    }

    /// Returns the following month.
    ///
    /// December wraps to January of the following year.
    pub fn next(self) -> Self {
        self.add_months(1)
    }

    /// Returns the month `n` steps away (negative `n` moves backwards).
    pub fn add_months(self, n: i64) -> Self {
        Self::from_ordinal(self.ordinal() + n)
    }

    /// Signed number of months from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}
