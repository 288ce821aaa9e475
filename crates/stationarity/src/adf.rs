//! Augmented Dickey-Fuller test with automatic lag selection.

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::debug;

use crate::error::StationarityError;
use crate::mackinnon::{mackinnon_critical_values, mackinnon_p_value};
use crate::ols::OlsFit;

pub use crate::mackinnon::CriticalValues;

/// How the number of lagged differences is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LagSelection {
    /// Minimise AIC over `0..=max_lag`.
    #[default]
    Aic,
    /// Minimise BIC over `0..=max_lag`.
    Bic,
    /// Use `max_lag` lagged differences without searching.
    Fixed,
}

/// Configuration for [`adf_test`].
///
/// # Example
///
/// ```
/// use urti_stationarity::{AdfConfig, LagSelection};
///
/// let config = AdfConfig::new()
///     .with_lag_selection(LagSelection::Bic)
///     .with_max_lag(Some(6))
///     .with_significance(0.01);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdfConfig {
    lag_selection: LagSelection,
    max_lag: Option<usize>,
    significance: f64,
}

impl AdfConfig {
    /// Creates a configuration with the defaults: AIC lag selection,
    /// `max_lag = ceil(12·(n/100)^{1/4})`, significance 0.05.
    pub fn new() -> Self {
        Self {
            lag_selection: LagSelection::Aic,
            max_lag: None,
            significance: 0.05,
        }
    }

    /// Sets the lag selection rule.
    pub fn with_lag_selection(mut self, lag_selection: LagSelection) -> Self {
        self.lag_selection = lag_selection;
        self
    }

    /// Sets the maximum number of lagged differences. `None` uses the
    /// sample-size rule.
    pub fn with_max_lag(mut self, max_lag: Option<usize>) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Sets the significance level used for the `stationary` verdict.
    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    /// Returns the lag selection rule.
    pub fn lag_selection(&self) -> LagSelection {
        self.lag_selection
    }

    /// Returns the configured maximum lag, if any.
    pub fn max_lag(&self) -> Option<usize> {
        self.max_lag
    }

    /// Returns the significance level.
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), StationarityError> {
        if !self.significance.is_finite() || self.significance <= 0.0 || self.significance >= 1.0 {
            return Err(StationarityError::InvalidSignificance {
                value: self.significance,
            });
        }
        Ok(())
    }
}

impl Default for AdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an augmented Dickey-Fuller test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdfResult {
    /// t-ratio of the lagged level coefficient.
    pub statistic: f64,
    /// MacKinnon approximate p-value.
    pub p_value: f64,
    /// Number of lagged differences in the final regression.
    pub used_lag: usize,
    /// Number of observations in the final regression.
    pub n_obs: usize,
    /// Critical values for `n_obs`.
    pub critical_values: CriticalValues,
    /// `p_value < significance`.
    pub stationary: bool,
}

/// Lag-order rule of thumb, `ceil(12·(n/100)^{1/4})`.
fn default_max_lag(n: usize) -> usize {
    (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Builds the regression of `dx[t]` on `[1, x[t], dx[t-1], .., dx[t-lags]]`
/// for `t` in `start..dx.len()`.
fn design(x: &[f64], dx: &[f64], lags: usize, start: usize) -> (Array1<f64>, Array2<f64>) {
    let rows = dx.len() - start;
    let y = Array1::from_iter(dx[start..].iter().copied());
    let mut m = Array2::<f64>::zeros((rows, lags + 2));
    for (r, t) in (start..dx.len()).enumerate() {
        m[[r, 0]] = 1.0;
        m[[r, 1]] = x[t];
        for i in 1..=lags {
            m[[r, i + 1]] = dx[t - i];
        }
    }
    (y, m)
}

fn select_lag(
    x: &[f64],
    dx: &[f64],
    max_lag: usize,
    rule: LagSelection,
) -> Result<usize, StationarityError> {
    if rule == LagSelection::Fixed || max_lag == 0 {
        return Ok(max_lag);
    }
    let mut best = (0, f64::INFINITY);
    for lags in 0..=max_lag {
        let (y, m) = design(x, dx, lags, max_lag);
        let fit = OlsFit::fit(&y, &m).ok_or(StationarityError::SingularRegression)?;
        let ic = match rule {
            LagSelection::Bic => fit.bic(),
            _ => fit.aic(),
        };
        debug!(lags, ic, "adf lag candidate");
        if ic < best.1 {
            best = (lags, ic);
        }
    }
    Ok(best.0)
}

/// Runs the augmented Dickey-Fuller test (constant, no trend) on `values`.
///
/// # Errors
///
/// - [`StationarityError::InvalidSignificance`] if the config is invalid.
/// - [`StationarityError::NonFiniteData`] if any value is NaN or infinite.
/// - [`StationarityError::InsufficientData`] if `values.len() < 2·max_lag + 4`.
/// - [`StationarityError::SingularRegression`] if the design is rank deficient.
pub fn adf_test(values: &[f64], config: &AdfConfig) -> Result<AdfResult, StationarityError> {
    config.validate()?;
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StationarityError::NonFiniteData);
    }
    let n = values.len();
    let max_lag = match config.max_lag {
        Some(lag) => lag,
        None => {
            if n < 4 {
                return Err(StationarityError::InsufficientData { n, min: 4 });
            }
            default_max_lag(n).min(n / 2 - 2)
        }
    };
    let min = max_lag
        .checked_mul(2)
        .and_then(|m| m.checked_add(4))
        .ok_or(StationarityError::InsufficientData { n, min: usize::MAX })?;
    if n < min {
        return Err(StationarityError::InsufficientData { n, min });
    }

    let dx: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let used_lag = select_lag(values, &dx, max_lag, config.lag_selection)?;

    let (y, m) = design(values, &dx, used_lag, used_lag);
    let fit = OlsFit::fit(&y, &m).ok_or(StationarityError::SingularRegression)?;
    let statistic = fit.t_value(1);
    if !statistic.is_finite() {
        return Err(StationarityError::SingularRegression);
    }

    let n_obs = y.len();
    let p_value = mackinnon_p_value(statistic);
    debug!(statistic, p_value, used_lag, n_obs, "adf test");

    Ok(AdfResult {
        statistic,
        p_value,
        used_lag,
        n_obs,
        critical_values: mackinnon_critical_values(n_obs),
        stationary: p_value < config.significance,
    })
}

/// Differences `values` `differences` times and runs [`adf_test`] on the
/// result.
#[tracing::instrument(skip(values, config), fields(n = values.len()))]
pub fn check_stationarity(
    values: &[f64],
    differences: usize,
    config: &AdfConfig,
) -> Result<AdfResult, StationarityError> {
    let differenced = urti_stats::difference(values, differences);
    adf_test(&differenced, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_lag_rule() {
        assert_eq!(default_max_lag(100), 12);
        assert_eq!(default_max_lag(189), 15);
        assert_eq!(default_max_lag(16), 8);
    }

    #[test]
    fn design_layout() {
        let x = [1.0, 3.0, 6.0, 10.0, 15.0];
        let dx = [2.0, 3.0, 4.0, 5.0];
        let (y, m) = design(&x, &dx, 1, 1);
        assert_eq!(y.to_vec(), vec![3.0, 4.0, 5.0]);
        assert_eq!(m.row(0).to_vec(), vec![1.0, 3.0, 2.0]);
        assert_eq!(m.row(2).to_vec(), vec![1.0, 10.0, 4.0]);
    }

    #[test]
    fn huge_max_lag_is_insufficient_data() {
        let values: Vec<f64> = (0..50).map(|i| (i as f64 * 0.7).sin()).collect();
        let cfg = AdfConfig::new()
            .with_lag_selection(LagSelection::Fixed)
            .with_max_lag(Some(usize::MAX / 2 + 1));
        assert_eq!(
            adf_test(&values, &cfg).unwrap_err(),
            StationarityError::InsufficientData {
                n: 50,
                min: usize::MAX
            }
        );
    }

    #[test]
    fn config_defaults() {
        let cfg = AdfConfig::default();
        assert_eq!(cfg.lag_selection(), LagSelection::Aic);
        assert_eq!(cfg.max_lag(), None);
        assert!((cfg.significance() - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn config_rejects_bad_significance() {
        for s in [0.0, 1.0, -0.1, f64::NAN] {
            let cfg = AdfConfig::new().with_significance(s);
            assert!(matches!(
                cfg.validate(),
                Err(StationarityError::InvalidSignificance { .. })
            ));
        }
    }

    #[test]
    fn lag_selection_serializes_lowercase() {
        let json = serde_json::to_string(&LagSelection::Bic).unwrap();
        assert_eq!(json, "\"bic\"");
    }
}
