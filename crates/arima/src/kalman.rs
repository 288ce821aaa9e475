//! Kalman filter for ARMA likelihood evaluation.
//!
//! Implements a univariate Kalman filter operating on the state-space
//! representation from [`crate::state_space`]. Used internally by
//! [`ArimaSpec::fit()`](crate::ArimaSpec::fit) to evaluate the exact
//! Gaussian log-likelihood via prediction error decomposition, started from
//! the stationary state covariance.
//!
//! With covariances in units of `sigma2`, the variance is concentrated out:
//!
//! ```text
//! sigma2_hat = (1/n) Σ v[t]² / F[t]
//! logL       = -n/2 · (ln 2π + 1 + ln sigma2_hat) − ½ Σ ln F[t]
//! ```
//!
//! **Not part of the public API.**

use std::f64::consts::PI;

use ndarray::{Array1, Axis};

use crate::error::ArimaError;
use crate::state_space::StateSpace;

/// Result of a full filter pass.
#[derive(Clone, Debug)]
pub(crate) struct KalmanOutput {
    /// One-step prediction errors `v[t]`.
    pub(crate) residuals: Vec<f64>,
    /// Concentrated innovation variance.
    pub(crate) sigma2: f64,
    /// Exact log-likelihood at `sigma2`.
    pub(crate) log_likelihood: f64,
    /// Predicted state one step past the data, `a[n+1|n]`.
    pub(crate) next_state: Array1<f64>,
}

struct Pass {
    v: Vec<f64>,
    f: Vec<f64>,
    next_state: Array1<f64>,
}

fn filter(ss: &StateSpace, data: &[f64]) -> Result<Pass, ArimaError> {
    let t = ss.t();
    let mut p = ss
        .stationary_covariance()
        .ok_or_else(|| ArimaError::SingularMatrix {
            detail: "stationary state covariance".to_string(),
        })?;
    let mut a = Array1::<f64>::zeros(ss.r());
    let mut v = Vec::with_capacity(data.len());
    let mut f = Vec::with_capacity(data.len());

    for &y in data {
        let innovation = y - a[0];
        let f_t = p[[0, 0]];
        if !f_t.is_finite() || f_t <= 0.0 {
            return Err(ArimaError::SingularMatrix {
                detail: format!("prediction variance {f_t}"),
            });
        }

        // Gain K = T P Z / F with Z = e₁.
        let gain = t.dot(&p.column(0)) / f_t;
        a = ss.step(&a) + &gain * innovation;

        let gain_col = gain.view().insert_axis(Axis(1));
        p = t.dot(&p).dot(&t.t()) + ss.rrt() - gain_col.dot(&gain_col.t()) * f_t;

        v.push(innovation);
        f.push(f_t);
    }

    Ok(Pass {
        v,
        f,
        next_state: a,
    })
}

fn concentrate(pass: &Pass) -> (f64, f64) {
    let n = pass.v.len() as f64;
    let scaled: f64 = pass.v.iter().zip(&pass.f).map(|(v, f)| v * v / f).sum();
    let log_det: f64 = pass.f.iter().map(|f| f.ln()).sum();
    let sigma2 = scaled / n;
    let log_likelihood = -0.5 * n * ((2.0 * PI).ln() + 1.0 + sigma2.ln()) - 0.5 * log_det;
    (sigma2, log_likelihood)
}

/// Concentrated log-likelihood only, for the optimizer's cost function.
pub(crate) fn kalman_concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArimaError> {
    let pass = filter(ss, data)?;
    Ok(concentrate(&pass).1)
}

/// Full pass returning residuals, variance, likelihood and the final state.
pub(crate) fn kalman_full(ss: &StateSpace, data: &[f64]) -> Result<KalmanOutput, ArimaError> {
    let pass = filter(ss, data)?;
    let (sigma2, log_likelihood) = concentrate(&pass);
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return Err(ArimaError::SingularMatrix {
            detail: format!("innovation variance {sigma2}"),
        });
    }
    Ok(KalmanOutput {
        residuals: pass.v,
        sigma2,
        log_likelihood,
        next_state: pass.next_state,
    })
}
