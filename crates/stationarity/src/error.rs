//! Error types for the urti-stationarity crate.

/// Error type for all fallible operations in the urti-stationarity crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationarityError {
    /// Returned when the sample is too short for the requested lag order.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input contains NaN or infinite values.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the test regression's design matrix is rank deficient
    /// (for example, a constant input series).
    #[error("unit-root regression is singular")]
    SingularRegression,

    /// Returned when the significance level is outside (0, 1).
    #[error("invalid significance level: {value} (must be in (0, 1))")]
    InvalidSignificance {
        /// The rejected significance level.
        value: f64,
    },
}
