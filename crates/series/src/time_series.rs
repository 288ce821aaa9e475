//! Ordered monthly time series.

use serde::Serialize;
use urti_calendar::{YearMonth, month_sequence};

use crate::error::SeriesError;

/// One `(timestamp, value)` pair of a [`TimeSeries`], used for export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Month of the observation.
    pub timestamp: YearMonth,
    /// Observed count.
    pub value: f64,
}

/// A non-empty, chronologically ordered monthly count series.
///
/// Invariants, checked on construction:
/// - timestamps are strictly increasing (no duplicates),
/// - values are finite and non-negative,
/// - there is at least one observation.
///
/// Values are stored as `f64` so that model fitting can borrow them
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<YearMonth>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series from parallel timestamp and value vectors.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::LengthMismatch`] | vectors differ in length |
    /// | [`SeriesError::EmptySeries`] | no observations |
    /// | [`SeriesError::NonIncreasingTimestamps`] | a timestamp does not exceed its predecessor |
    /// | [`SeriesError::InvalidValue`] | a value is negative, NaN or infinite |
    pub fn new(timestamps: Vec<YearMonth>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        if values.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NonIncreasingTimestamps { index: i + 1 });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(SeriesError::InvalidValue { index, value });
        }
        Ok(Self { timestamps, values })
    }

    /// Creates a contiguous series whose first observation falls in `start`.
    ///
    /// # Errors
    ///
    /// Same as [`TimeSeries::new`]; only `EmptySeries` and `InvalidValue`
    /// can occur.
    pub fn from_values(start: YearMonth, values: Vec<f64>) -> Result<Self, SeriesError> {
        let timestamps = month_sequence(start, values.len());
        Self::new(timestamps, values)
    }

    /// Creates a contiguous series from integer counts.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if `counts` is empty.
    pub fn from_counts(start: YearMonth, counts: &[u32]) -> Result<Self, SeriesError> {
        Self::from_values(start, counts.iter().map(|&c| f64::from(c)).collect())
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a `TimeSeries` holds at least one observation.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the timestamps.
    pub fn timestamps(&self) -> &[YearMonth] {
        &self.timestamps
    }

    /// Returns the observed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Timestamp of the first observation.
    pub fn first(&self) -> YearMonth {
        self.timestamps[0]
    }

    /// Timestamp of the last observation.
    pub fn last(&self) -> YearMonth {
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Iterates over `(timestamp, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.timestamps
            .iter()
            .zip(&self.values)
            .map(|(&timestamp, &value)| SeriesPoint { timestamp, value })
    }

    /// Months inside `[first, last]` that have no observation.
    pub fn gaps(&self) -> Vec<YearMonth> {
        let mut gaps = Vec::new();
        for pair in self.timestamps.windows(2) {
            let mut t = pair[0].next();
            while t < pair[1] {
                gaps.push(t);
                t = t.next();
            }
        }
        gaps
    }

    /// `true` when every month between the first and last observation is
    /// present.
    pub fn is_contiguous(&self) -> bool {
        self.timestamps
            .windows(2)
            .all(|w| w[0].months_until(w[1]) == 1)
    }

    /// Values differenced `d` times; `len() - d` entries, empty if `d >= len()`.
    pub fn difference(&self, d: usize) -> Vec<f64> {
        urti_stats::difference(&self.values, d)
    }
}
