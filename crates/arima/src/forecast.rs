//! Point forecasts and confidence intervals.
//!
//! Points come from iterating the fitted ARMA transition on the filtered
//! state, then integrating back through every differencing level. Standard
//! errors use the ψ-weights of the integrated model:
//!
//! ```text
//! se[h] = sqrt(sigma2 · Σ_{j<h} ψ_j²)
//! ```

use ndarray::Array1;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use urti_calendar::YearMonth;

use crate::diff;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::spec::ArimaSpec;
use crate::state_space::StateSpace;

/// One forecast step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Forecast month.
    pub timestamp: YearMonth,
    /// Point forecast.
    pub point: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
    /// Forecast standard error.
    pub std_error: f64,
}

impl ForecastPoint {
    /// Interval width, `upper − lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// A sequence of monthly forecasts continuing a fitted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    spec: ArimaSpec,
    level: f64,
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Spec of the model that produced this forecast.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Confidence level of the intervals.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Forecast steps in chronological order.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when there are no steps.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point forecasts only.
    pub fn point_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.point).collect()
    }
}

pub(crate) fn forecast(fit: &ArimaFit, horizon: usize, level: f64) -> Result<Forecast, ArimaError> {
    if horizon == 0 {
        return Err(ArimaError::InvalidHorizon { horizon });
    }
    if !(level > 0.0 && level < 1.0) {
        return Err(ArimaError::InvalidConfidenceLevel { level });
    }
    let normal =
        Normal::new(0.0, 1.0).map_err(|_| ArimaError::InvalidConfidenceLevel { level })?;
    let z = normal.inverse_cdf(0.5 + level / 2.0);

    let ss = StateSpace::new(fit.ar(), fit.ma());
    let mut state = Array1::from(fit.next_state().to_vec());
    let mut differenced = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        differenced.push(state[0] + fit.mean());
        state = ss.step(&state);
    }
    let points = diff::integrate(&differenced, fit.last_values());

    let phi_star = diff::integrated_ar(fit.ar(), fit.spec().d());
    let psi = diff::psi_weights(&phi_star, fit.ma(), horizon);

    let mut timestamp = fit.last_timestamp();
    let mut cumulative = 0.0;
    let points = points
        .into_iter()
        .zip(psi)
        .map(|(point, psi_j)| {
            cumulative += psi_j * psi_j;
            timestamp = timestamp.next();
            let std_error = (fit.sigma2() * cumulative).sqrt();
            ForecastPoint {
                timestamp,
                point,
                lower: point - z * std_error,
                upper: point + z * std_error,
                std_error,
            }
        })
        .collect();

    Ok(Forecast {
        spec: fit.spec(),
        level,
        points,
    })
}
