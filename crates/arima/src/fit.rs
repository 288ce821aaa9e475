//! Fitted ARIMA model results.

use urti_calendar::YearMonth;
use urti_series::TimeSeries;

use crate::diff;
use crate::error::ArimaError;
use crate::forecast::{self, Forecast};
use crate::kalman::KalmanOutput;
use crate::residuals::ResidualDiagnostics;
use crate::spec::ArimaSpec;

/// Default confidence level of [`ArimaFit::forecast()`].
pub const DEFAULT_LEVEL: f64 = 0.95;

/// A fitted ARIMA(p,d,q) model produced by [`ArimaSpec::fit()`].
///
/// Holds estimated AR (`phi`) and MA (`theta`) coefficients, the innovation
/// variance (`sigma2`), the maximised log-likelihood, one-step residuals and
/// fitted values, and the filter state needed to forecast.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     B["ArimaFit"] --> C[".ar() / .ma()"]
///     B --> D[".aic() / .bic()"]
///     B --> E[".residuals() / .fitted_values()"]
///     B --> F[".forecast(h)?"]
/// ```
#[derive(Clone, Debug)]
pub struct ArimaFit {
    spec: ArimaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    mean: f64,
    sigma2: f64,
    log_likelihood: f64,
    residuals: Vec<f64>,
    fitted: Vec<f64>,
    timestamps: Vec<YearMonth>,
    next_state: Vec<f64>,
    last_values: Vec<f64>,
    iterations: u64,
}

impl ArimaFit {
    /// Assembles a fit from the final Kalman pass over the differenced data.
    pub(crate) fn new(
        spec: ArimaSpec,
        ar: Vec<f64>,
        ma: Vec<f64>,
        mean: f64,
        output: KalmanOutput,
        series: &TimeSeries,
        iterations: u64,
    ) -> Self {
        let d = spec.d();
        let values = series.values();
        // A one-step residual is the same on every differencing level.
        let fitted = values[d..]
            .iter()
            .zip(&output.residuals)
            .map(|(y, v)| y - v)
            .collect();
        Self {
            spec,
            ar,
            ma,
            mean,
            sigma2: output.sigma2,
            log_likelihood: output.log_likelihood,
            residuals: output.residuals,
            fitted,
            timestamps: series.timestamps()[d..].to_vec(),
            next_state: output.next_state.to_vec(),
            last_values: diff::last_values(values, d),
            iterations,
        }
    }

    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the `(p, d, q)` order of the fitted model.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.spec.p(), self.spec.d(), self.spec.q())
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the estimated mean of the differenced series, `0.0` when
    /// `d >= 1`.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the maximised log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Number of estimated parameters used by the information criteria.
    pub fn n_params(&self) -> usize {
        self.spec.n_params()
    }

    /// Number of observations after differencing.
    pub fn n_obs(&self) -> usize {
        self.residuals.len()
    }

    /// Nelder-Mead iterations used.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Akaike Information Criterion, `2k − 2 logL`.
    pub fn aic(&self) -> f64 {
        2.0 * self.n_params() as f64 - 2.0 * self.log_likelihood
    }

    /// Bayesian Information Criterion, `k ln(n) − 2 logL`.
    pub fn bic(&self) -> f64 {
        self.n_params() as f64 * (self.n_obs() as f64).ln() - 2.0 * self.log_likelihood
    }

    /// One-step-ahead prediction errors, one per used observation.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// One-step-ahead predictions on the original scale.
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    /// Timestamps of the used observations (the first `d` are consumed by
    /// differencing).
    pub fn timestamps(&self) -> &[YearMonth] {
        &self.timestamps
    }

    /// Timestamp of the last observation.
    pub fn last_timestamp(&self) -> YearMonth {
        // The differenced series is never empty.
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Residual sequence and its moments.
    pub fn residual_diagnostics(&self) -> ResidualDiagnostics {
        ResidualDiagnostics::from_fit(self)
    }

    /// Forecasts `horizon` months ahead with 95% intervals.
    ///
    /// # Errors
    ///
    /// [`ArimaError::InvalidHorizon`] if `horizon == 0`.
    pub fn forecast(&self, horizon: usize) -> Result<Forecast, ArimaError> {
        self.forecast_with_level(horizon, DEFAULT_LEVEL)
    }

    /// Forecasts `horizon` months ahead with intervals at `level`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidHorizon`] | `horizon == 0` |
    /// | [`ArimaError::InvalidConfidenceLevel`] | `level` outside (0, 1) |
    pub fn forecast_with_level(&self, horizon: usize, level: f64) -> Result<Forecast, ArimaError> {
        forecast::forecast(self, horizon, level)
    }

    pub(crate) fn next_state(&self) -> &[f64] {
        &self.next_state
    }

    pub(crate) fn last_values(&self) -> &[f64] {
        &self.last_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;
    use urti_calendar::Month;

    fn fixture() -> ArimaFit {
        let series = TimeSeries::from_values(
            YearMonth::new(2020, Month::Jan),
            vec![10.0, 12.0, 11.0, 15.0],
        )
        .unwrap();
        let output = KalmanOutput {
            residuals: vec![1.5, -1.0, 3.5],
            sigma2: 2.0,
            log_likelihood: -100.0,
            next_state: Array1::from(vec![0.7, 0.0]),
        };
        ArimaFit::new(
            ArimaSpec::new(1, 1, 1),
            vec![0.5],
            vec![0.3],
            0.0,
            output,
            &series,
            42,
        )
    }

    #[test]
    fn fit_accessors_round_trip() {
        let fit = fixture();
        assert_eq!(fit.order(), (1, 1, 1));
        assert_eq!(fit.ar(), &[0.5]);
        assert_eq!(fit.ma(), &[0.3]);
        assert_eq!(fit.sigma2(), 2.0);
        assert_eq!(fit.log_likelihood(), -100.0);
        assert_eq!(fit.n_obs(), 3);
        assert_eq!(fit.iterations(), 42);
        assert_eq!(fit.last_values(), &[15.0]);
        assert_eq!(fit.next_state(), &[0.7, 0.0]);
    }

    #[test]
    fn fitted_values_are_observed_minus_residual() {
        let fit = fixture();
        assert_eq!(fit.fitted_values(), &[10.5, 12.0, 11.5]);
        assert_eq!(fit.timestamps()[0], YearMonth::new(2020, Month::Feb));
        assert_eq!(fit.last_timestamp(), YearMonth::new(2020, Month::Apr));
    }

    #[test]
    fn fit_information_criteria() {
        let fit = fixture();
        // k = p + q + 1 = 3
        assert_abs_diff_eq!(fit.aic(), 206.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.bic(), 3.0 * 3.0_f64.ln() + 200.0, epsilon = 1e-12);
    }

    #[test]
    fn fit_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ArimaFit>();
    }
}
