//! Consecutive month sequence generation.

use crate::year_month::YearMonth;

/// Generates a contiguous sequence of months.
///
/// Starting from `start`, produces exactly `n_months` consecutive months by
/// repeatedly advancing to the next month. Year boundaries are handled
/// automatically (December wraps to January of the following year).
///
/// # Example
///
/// ```
/// use urti_calendar::{Month, YearMonth, month_sequence};
///
/// let start = YearMonth::new(2024, Month::Nov);
/// let months = month_sequence(start, 3);
/// assert_eq!(months[2], YearMonth::new(2025, Month::Jan));
/// ```
pub fn month_sequence(start: YearMonth, n_months: usize) -> Vec<YearMonth> {
    let mut months = Vec::with_capacity(n_months);
    if n_months == 0 {
        return months;
    }
    months.push(start);
    let mut current = start;
    for _ in 1..n_months {
        current = current.next();
        months.push(current);
    }
    months
}
