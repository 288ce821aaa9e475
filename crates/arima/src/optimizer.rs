//! Nelder-Mead optimizer for ARIMA maximum-likelihood estimation.
//!
//! Wraps the `argmin` crate to minimize the negative concentrated
//! log-likelihood of the differenced series over unconstrained PACF
//! parameters.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;
use tracing::{debug, warn};
use urti_series::TimeSeries;

use crate::config::FitOptions;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::kalman;
use crate::params;
use crate::spec::ArimaSpec;
use crate::state_space::StateSpace;

/// Fits an ARIMA(p,d,q) model to a series via exact MLE.
///
/// This is the full pipeline:
/// 1. Validate data
/// 2. Difference `d` times and centre when a mean is estimated
/// 3. Optimize the concentrated log-likelihood via Nelder-Mead
/// 4. Extract final quantities via a full Kalman pass
pub(crate) fn fit_arima(
    spec: ArimaSpec,
    series: &TimeSeries,
    options: &FitOptions,
) -> Result<ArimaFit, ArimaError> {
    // 1. Validate
    let values = series.values();
    if values.is_empty() {
        return Err(ArimaError::EmptyData);
    }
    if values.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }
    let min_len = spec.d() + 2;
    if values.len() < min_len {
        return Err(ArimaError::InsufficientData {
            n: values.len(),
            min: min_len,
        });
    }

    // 2. Difference
    let differenced = urti_stats::difference(values, spec.d());
    let k = spec.n_params();
    if k > differenced.len() {
        return Err(ArimaError::SingularMatrix {
            detail: format!("{k} parameters for {} observations", differenced.len()),
        });
    }
    let min_val = differenced.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = differenced.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max_val - min_val).abs() < f64::EPSILON {
        return Err(ArimaError::ConstantData);
    }
    let mean = if spec.includes_mean() {
        urti_stats::mean(&differenced)
    } else {
        0.0
    };
    let centered: Vec<f64> = differenced.iter().map(|x| x - mean).collect();

    // 3. Optimize; ARMA(0,0) needs no search
    let (ar, ma, iterations) = if spec.p() + spec.q() == 0 {
        (Vec::new(), Vec::new(), 0)
    } else {
        optimize(&centered, spec.p(), spec.q(), options)?
    };

    // 4. Full Kalman pass for sigma2, residuals, log-likelihood
    let ss = StateSpace::new(&ar, &ma);
    let output = kalman::kalman_full(&ss, &centered)?;
    debug!(
        %spec,
        iterations,
        loglik = output.log_likelihood,
        sigma2 = output.sigma2,
        "arima fit complete"
    );

    Ok(ArimaFit::new(spec, ar, ma, mean, output, series, iterations))
}

/// Runs Nelder-Mead from the origin and returns `(ar, ma, iterations)`.
fn optimize(
    data: &[f64],
    p: usize,
    q: usize,
    options: &FitOptions,
) -> Result<(Vec<f64>, Vec<f64>, u64), ArimaError> {
    let dim = p + q;
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = options.initial_step();
        simplex.push(vertex);
    }

    let cost = ArimaCost { data, p };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(options.tolerance())
        .map_err(|e| ArimaError::OptimizationFailed {
            detail: e.to_string(),
        })?;
    let max_iters = options.max_iters();
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(max_iters))
        .run()
        .map_err(|e| ArimaError::OptimizationFailed {
            detail: e.to_string(),
        })?;

    let state = result.state();
    let iterations = state.get_iter();
    if let TerminationStatus::Terminated(TerminationReason::MaxItersReached) =
        state.get_termination_status()
    {
        warn!(iterations, "nelder-mead exhausted its iteration budget");
        return Err(ArimaError::NonConvergence { iterations });
    }
    if state.get_best_cost() >= f64::MAX {
        return Err(ArimaError::SingularMatrix {
            detail: "likelihood undefined at every simplex vertex".to_string(),
        });
    }
    let best = state
        .get_best_param()
        .ok_or_else(|| ArimaError::OptimizationFailed {
            detail: "solver returned no parameters".to_string(),
        })?;

    let (alpha, beta) = best.split_at(p);
    Ok((
        params::ar_from_unconstrained(alpha),
        params::ma_from_unconstrained(beta),
        iterations,
    ))
}

/// Cost function for argmin: negative concentrated log-likelihood.
struct ArimaCost<'a> {
    data: &'a [f64],
    p: usize,
}

impl CostFunction for ArimaCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (alpha, beta) = params.split_at(self.p);
        let ar = params::ar_from_unconstrained(alpha);
        let ma = params::ma_from_unconstrained(beta);
        let ss = StateSpace::new(&ar, &ma);

        match kalman::kalman_concentrated_loglik(&ss, self.data) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(f64::MAX),
        }
    }
}
