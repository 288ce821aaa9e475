//! Calendar month enum and abbreviation parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A calendar month.
///
/// Parsed from, and displayed as, the canonical three-letter English
/// abbreviation (`"Jan"`, `"Feb"`, ..., `"Dec"`). Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Creates a month from its number (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for numbers outside 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        match month {
            1..=12 => Ok(Self::ALL[usize::from(month - 1)]),
            _ => Err(CalendarError::InvalidMonth { month }),
        }
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the zero-based month index (0..=11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.abbrev() == s)
            .ok_or_else(|| CalendarError::InvalidMonthName {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
