//! Error types for the urti-series crate.

use urti_calendar::Month;

/// Error type for all fallible operations in the urti-series crate.
///
/// Every variant describes malformed input: unknown keys, a table whose
/// shape does not match its year list, or a series that breaks the
/// timestamp/value invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a month key is not a canonical three-letter abbreviation.
    #[error("unrecognized month name: {name:?}")]
    UnknownMonth {
        /// The key that was provided.
        name: String,
    },

    /// Returned when assembly produces no observations.
    #[error("no observations: the series is empty")]
    EmptySeries,

    /// Returned when the year list is not strictly increasing.
    #[error("years must be strictly increasing: {prev} is followed by {next}")]
    YearsNotIncreasing {
        /// The earlier year.
        prev: i32,
        /// The year that fails to exceed it.
        next: i32,
    },

    /// Returned when a month track has more entries than there are years.
    #[error("{month} has {len} entries but only {n_years} years are listed")]
    TrackTooLong {
        /// The offending month.
        month: Month,
        /// Number of entries in the track.
        len: usize,
        /// Number of years in the year list.
        n_years: usize,
    },

    /// Returned when timestamp and value sequences differ in length.
    #[error("length mismatch: {timestamps} timestamps, {values} values")]
    LengthMismatch {
        /// Number of timestamps.
        timestamps: usize,
        /// Number of values.
        values: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps must be strictly increasing (violated at index {index})")]
    NonIncreasingTimestamps {
        /// Index of the first timestamp that does not exceed its predecessor.
        index: usize,
    },

    /// Returned when a value is negative or non-finite.
    #[error("invalid count at index {index}: {value} (must be finite and >= 0)")]
    InvalidValue {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
}
