//! Error types for the urti-arima crate.

/// Error type for all fallible operations in the urti-arima crate.
///
/// Covers input validation, numerical failures during fitting, forecast
/// arguments, and access to a [`FitSession`](crate::FitSession) that has
/// not produced a fit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaError {
    /// Returned when the input series is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when too few observations remain after differencing.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the differenced series has zero variance.
    #[error("differenced data is constant (zero variance)")]
    ConstantData,

    /// Returned when the model is numerically ill-conditioned, for example
    /// more parameters than observations or a singular state covariance.
    #[error("singular matrix: {detail}")]
    SingularMatrix {
        /// What could not be inverted or estimated.
        detail: String,
    },

    /// Returned when the optimizer exhausts its iteration budget.
    #[error("optimisation did not converge within {iterations} iterations")]
    NonConvergence {
        /// Iterations performed.
        iterations: u64,
    },

    /// Returned when the optimizer itself reports an error.
    #[error("optimisation failed: {detail}")]
    OptimizationFailed {
        /// Message reported by the solver.
        detail: String,
    },

    /// Returned when a forecast horizon of zero is requested.
    #[error("invalid forecast horizon: {horizon} (must be >= 1)")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },

    /// Returned when a confidence level is outside (0, 1).
    #[error("invalid confidence level: {level} (must be in (0, 1))")]
    InvalidConfidenceLevel {
        /// The rejected level.
        level: f64,
    },

    /// Returned when `max_iters` is zero.
    #[error("invalid max_iters: {max_iters} (must be >= 1)")]
    InvalidMaxIters {
        /// The rejected iteration budget.
        max_iters: u64,
    },

    /// Returned when the simplex tolerance is not finite and positive.
    #[error("invalid tolerance: {tolerance} (must be finite and > 0)")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Returned when the initial simplex step is not finite and positive.
    #[error("invalid initial step: {step} (must be finite and > 0)")]
    InvalidInitialStep {
        /// The rejected step.
        step: f64,
    },

    /// Returned when forecasts or residuals are requested from a session
    /// without a successful fit.
    #[error("model has not been fitted")]
    NotFitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_data() {
        assert_eq!(ArimaError::EmptyData.to_string(), "input data is empty");
    }

    #[test]
    fn error_insufficient_data() {
        let err = ArimaError::InsufficientData { n: 2, min: 3 };
        assert_eq!(
            err.to_string(),
            "insufficient data: got 2 observations, need at least 3"
        );
    }

    #[test]
    fn error_non_finite_data() {
        assert_eq!(
            ArimaError::NonFiniteData.to_string(),
            "input data contains non-finite values"
        );
    }

    #[test]
    fn error_constant_data() {
        assert_eq!(
            ArimaError::ConstantData.to_string(),
            "differenced data is constant (zero variance)"
        );
    }

    #[test]
    fn error_singular_matrix() {
        let err = ArimaError::SingularMatrix {
            detail: "21 parameters for 15 observations".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "singular matrix: 21 parameters for 15 observations"
        );
    }

    #[test]
    fn error_non_convergence() {
        let err = ArimaError::NonConvergence { iterations: 1000 };
        assert_eq!(
            err.to_string(),
            "optimisation did not converge within 1000 iterations"
        );
    }

    #[test]
    fn error_optimization_failed() {
        let err = ArimaError::OptimizationFailed {
            detail: "bad simplex".to_string(),
        };
        assert_eq!(err.to_string(), "optimisation failed: bad simplex");
    }

    #[test]
    fn error_invalid_horizon() {
        let err = ArimaError::InvalidHorizon { horizon: 0 };
        assert_eq!(err.to_string(), "invalid forecast horizon: 0 (must be >= 1)");
    }

    #[test]
    fn error_invalid_confidence_level() {
        let err = ArimaError::InvalidConfidenceLevel { level: 1.5 };
        assert_eq!(
            err.to_string(),
            "invalid confidence level: 1.5 (must be in (0, 1))"
        );
    }

    #[test]
    fn error_invalid_options() {
        assert_eq!(
            ArimaError::InvalidMaxIters { max_iters: 0 }.to_string(),
            "invalid max_iters: 0 (must be >= 1)"
        );
        assert_eq!(
            ArimaError::InvalidTolerance { tolerance: -1.0 }.to_string(),
            "invalid tolerance: -1 (must be finite and > 0)"
        );
        assert_eq!(
            ArimaError::InvalidInitialStep { step: 0.0 }.to_string(),
            "invalid initial step: 0 (must be finite and > 0)"
        );
    }

    #[test]
    fn error_not_fitted() {
        assert_eq!(ArimaError::NotFitted.to_string(), "model has not been fitted");
    }

    #[test]
    fn error_is_clone() {
        let err = ArimaError::NonConvergence { iterations: 5 };
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ArimaError>();
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ArimaError>();
    }
}
