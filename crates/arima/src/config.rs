//! Optimizer settings for ARIMA fitting.

use crate::error::ArimaError;

/// Nelder-Mead settings used by [`ArimaSpec::fit_with()`](crate::ArimaSpec::fit_with).
///
/// # Example
///
/// ```
/// use urti_arima::FitOptions;
///
/// let options = FitOptions::new()
///     .with_max_iters(2000)
///     .with_tolerance(1e-10);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Iteration budget; hitting it is reported as non-convergence.
    max_iters: u64,
    /// Standard deviation of simplex costs at which the search stops.
    tolerance: f64,
    /// Offset of each initial simplex vertex from the origin.
    initial_step: f64,
}

impl FitOptions {
    /// Creates options with the defaults.
    ///
    /// Defaults: `max_iters = 1000`, `tolerance = 1e-8`, `initial_step = 0.5`.
    pub fn new() -> Self {
        Self {
            max_iters: 1000,
            tolerance: 1e-8,
            initial_step: 0.5,
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the simplex cost tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial simplex step.
    pub fn with_initial_step(mut self, initial_step: f64) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Returns the iteration budget.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the simplex cost tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the initial simplex step.
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Validates these options.
    pub fn validate(&self) -> Result<(), ArimaError> {
        if self.max_iters < 1 {
            return Err(ArimaError::InvalidMaxIters {
                max_iters: self.max_iters,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ArimaError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(ArimaError::InvalidInitialStep {
                step: self.initial_step,
            });
        }
        Ok(())
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self::new()
    }
}
