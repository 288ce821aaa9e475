//! Residual diagnostics for a fitted model.

use serde::Serialize;
use urti_calendar::YearMonth;
use urti_stats::{HistogramBin, Moments};

use crate::fit::ArimaFit;
use crate::spec::ArimaSpec;

/// One used observation with its one-step prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualPoint {
    /// Month of the observation.
    pub timestamp: YearMonth,
    /// Observed value.
    pub observed: f64,
    /// One-step-ahead prediction.
    pub fitted: f64,
    /// `observed − fitted`.
    pub residual: f64,
}

/// Residual sequence of a fit together with its first four moments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidualDiagnostics {
    spec: ArimaSpec,
    moments: Moments,
    points: Vec<ResidualPoint>,
}

impl ResidualDiagnostics {
    /// Collects residuals and fitted values of `fit`.
    pub fn from_fit(fit: &ArimaFit) -> Self {
        let points: Vec<ResidualPoint> = fit
            .timestamps()
            .iter()
            .zip(fit.fitted_values())
            .zip(fit.residuals())
            .map(|((&timestamp, &fitted), &residual)| ResidualPoint {
                timestamp,
                observed: fitted + residual,
                fitted,
                residual,
            })
            .collect();
        Self {
            spec: fit.spec(),
            moments: urti_stats::moments(fit.residuals()),
            points,
        }
    }

    /// Spec of the diagnosed model.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Per-observation residuals with timestamps and fitted values.
    pub fn points(&self) -> &[ResidualPoint] {
        &self.points
    }

    /// Residual values in time order.
    pub fn residuals(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.residual).collect()
    }

    /// Residual moments.
    pub fn moments(&self) -> &Moments {
        &self.moments
    }

    /// Mean residual.
    pub fn mean(&self) -> f64 {
        self.moments.mean
    }

    /// Sample variance of the residuals.
    pub fn variance(&self) -> f64 {
        self.moments.variance
    }

    /// Adjusted skewness, `None` for fewer than 3 residuals or zero spread.
    pub fn skewness(&self) -> Option<f64> {
        self.moments.skewness
    }

    /// Excess kurtosis, `None` for fewer than 4 residuals or zero spread.
    pub fn kurtosis(&self) -> Option<f64> {
        self.moments.kurtosis
    }

    /// Equal-width histogram of the residuals.
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        urti_stats::histogram(&self.residuals(), bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use urti_calendar::Month;
    use urti_series::TimeSeries;

    use crate::kalman::KalmanOutput;

    fn diagnostics() -> ResidualDiagnostics {
        let series = TimeSeries::from_values(
            YearMonth::new(2015, Month::Mar),
            vec![5.0, 7.0, 6.0, 9.0, 8.0],
        )
        .unwrap();
        let output = KalmanOutput {
            residuals: vec![2.0, -1.0, 3.0, -1.0],
            sigma2: 3.0,
            log_likelihood: -10.0,
            next_state: Array1::from(vec![0.0]),
        };
        let fit = ArimaFit::new(ArimaSpec::new(0, 1, 0), vec![], vec![], 0.0, output, &series, 0);
        ResidualDiagnostics::from_fit(&fit)
    }

    #[test]
    fn points_align_with_used_observations() {
        let diag = diagnostics();
        assert_eq!(diag.points().len(), 4);
        let first = diag.points()[0];
        assert_eq!(first.timestamp, YearMonth::new(2015, Month::Apr));
        assert_eq!(first.observed, 7.0);
        assert_eq!(first.fitted, 5.0);
        assert_eq!(first.residual, 2.0);
    }

    #[test]
    fn moments_of_residuals() {
        let diag = diagnostics();
        assert_eq!(diag.mean(), 0.75);
        assert!((diag.variance() - 4.25).abs() < 1e-12);
        assert!(diag.skewness().is_some());
        assert!(diag.kurtosis().is_some());
    }

    #[test]
    fn histogram_counts_every_residual() {
        let hist = diagnostics().histogram(3);
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn serializes_points_and_moments() {
        let json = serde_json::to_value(diagnostics()).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 4);
        assert_eq!(json["moments"]["n"], 4);
    }
}
