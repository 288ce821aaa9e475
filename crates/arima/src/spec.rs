//! ARIMA model specification (unfitted).

use std::fmt;

use serde::Serialize;
use urti_series::TimeSeries;

use crate::config::FitOptions;
use crate::error::ArimaError;
use crate::fit::ArimaFit;

/// An unfitted ARIMA(p,d,q) model specification.
///
/// This is the entry point of the typestate workflow. Create a spec with
/// [`ArimaSpec::new()`], then call [`ArimaSpec::fit()`] to obtain an
/// [`ArimaFit`].
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     A["ArimaSpec::new(p, d, q)"] -->|".fit(&series)?"| B["ArimaFit"]
///     B -->|".forecast(h)?"| C["Forecast"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaSpec {
    /// Creates a new ARIMA(p,d,q) specification.
    ///
    /// # Example
    ///
    /// ```
    /// use urti_arima::ArimaSpec;
    ///
    /// let spec = ArimaSpec::new(3, 1, 0);
    /// assert_eq!(spec.p(), 3);
    /// assert_eq!(spec.d(), 1);
    /// assert_eq!(spec.q(), 0);
    /// assert_eq!(spec.to_string(), "ARIMA(3,1,0)");
    /// ```
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// `true` when a mean is estimated, which happens only for `d = 0`.
    ///
    /// The mean is the sample mean of the series, subtracted before the
    /// likelihood is maximised over the ARMA coefficients. It is not a joint
    /// maximum-likelihood estimate, but it is still counted in
    /// [`n_params`](Self::n_params) for AIC and BIC.
    pub fn includes_mean(&self) -> bool {
        self.d == 0
    }

    /// Number of estimated parameters `k`: AR and MA coefficients, the
    /// innovation variance, and the mean when [`includes_mean`](Self::includes_mean).
    pub fn n_params(&self) -> usize {
        self.p + self.q + 1 + usize::from(self.includes_mean())
    }

    /// Fits this specification with default [`FitOptions`].
    ///
    /// # Errors
    ///
    /// See [`ArimaSpec::fit_with()`].
    pub fn fit(&self, series: &TimeSeries) -> Result<ArimaFit, ArimaError> {
        self.fit_with(series, &FitOptions::default())
    }

    /// Fits this specification to `series` by exact maximum likelihood on
    /// the `d`-times differenced values.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidMaxIters`] and friends | `options` fail validation |
    /// | [`ArimaError::InsufficientData`] | fewer than 2 observations remain after differencing |
    /// | [`ArimaError::NonFiniteData`] | any value is NaN or infinite |
    /// | [`ArimaError::SingularMatrix`] | `n_params()` exceeds the differenced length, or the likelihood cannot be evaluated |
    /// | [`ArimaError::ConstantData`] | the differenced series has zero variance |
    /// | [`ArimaError::NonConvergence`] | the iteration budget is exhausted |
    #[tracing::instrument(skip(series, options), fields(spec = %self, n = series.len()))]
    pub fn fit_with(
        &self,
        series: &TimeSeries,
        options: &FitOptions,
    ) -> Result<ArimaFit, ArimaError> {
        options.validate()?;
        crate::optimizer::fit_arima(*self, series, options)
    }
}

impl fmt::Display for ArimaSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urti_calendar::{Month, YearMonth};

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::from_values(YearMonth::new(2010, Month::Jan), values.to_vec()).unwrap()
    }

    #[test]
    fn spec_round_trip() {
        let spec = ArimaSpec::new(2, 1, 1);
        assert_eq!(spec.p(), 2);
        assert_eq!(spec.d(), 1);
        assert_eq!(spec.q(), 1);
    }

    #[test]
    fn spec_display() {
        assert_eq!(ArimaSpec::new(1, 1, 1).to_string(), "ARIMA(1,1,1)");
    }

    #[test]
    fn spec_param_count() {
        assert_eq!(ArimaSpec::new(3, 1, 0).n_params(), 4);
        assert_eq!(ArimaSpec::new(1, 1, 1).n_params(), 3);
        assert_eq!(ArimaSpec::new(1, 0, 1).n_params(), 4);
    }

    #[test]
    fn spec_serializes_orders() {
        let json = serde_json::to_string(&ArimaSpec::new(2, 1, 0)).unwrap();
        assert_eq!(json, r#"{"p":2,"d":1,"q":0}"#);
    }

    #[test]
    fn spec_is_copy() {
        let a = ArimaSpec::new(1, 1, 1);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn fit_insufficient_data() {
        let err = ArimaSpec::new(0, 1, 0).fit(&series(&[1.0, 2.0])).unwrap_err();
        assert_eq!(err, ArimaError::InsufficientData { n: 2, min: 3 });
    }

    #[test]
    fn fit_over_parameterized() {
        let err = ArimaSpec::new(4, 1, 4)
            .fit(&series(&[1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.0]))
            .unwrap_err();
        assert!(matches!(err, ArimaError::SingularMatrix { .. }));
    }

    #[test]
    fn fit_constant_differences() {
        let err = ArimaSpec::new(1, 1, 0)
            .fit(&series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))
            .unwrap_err();
        assert_eq!(err, ArimaError::ConstantData);
    }

    #[test]
    fn fit_rejects_invalid_options() {
        let opts = FitOptions::new().with_max_iters(0);
        let err = ArimaSpec::new(1, 1, 0)
            .fit_with(&series(&[1.0, 3.0, 2.0, 5.0]), &opts)
            .unwrap_err();
        assert_eq!(err, ArimaError::InvalidMaxIters { max_iters: 0 });
    }
}
