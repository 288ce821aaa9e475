//! ARMA state-space representation.
//!
//! Writes ARMA(p,q) coefficients in Harvey's state-space form:
//!
//! ```text
//! a[t+1] = T * a[t] + R * e[t]     (state transition)
//! y[t]   = Z' * a[t]                (observation, Z = e₁)
//! ```
//!
//! where `T` is the companion-form transition matrix, `R` the noise-input
//! vector, and `e[t] ~ N(0, sigma2)`. Covariances are kept in units of
//! `sigma2` so the variance can be concentrated out of the likelihood.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, Axis};
use urti_stats::linalg;

/// State-space matrices of an ARMA(p,q) model.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    t: Array2<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    /// Builds the state-space form from AR and MA coefficients.
    ///
    /// The state dimension is `r = max(p, q + 1)`.
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let r = ar.len().max(ma.len() + 1);

        // AR coefficients down the first column, ones on the superdiagonal.
        let mut t = Array2::zeros((r, r));
        for (i, &phi) in ar.iter().enumerate() {
            t[[i, 0]] = phi;
        }
        for i in 0..r - 1 {
            t[[i, i + 1]] = 1.0;
        }

        // R = [1, θ₁, …, θ_q, 0, …]
        let mut r_vec = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, &theta) in ma.iter().enumerate() {
            r_vec[j + 1] = theta;
        }
        let r_col = r_vec.view().insert_axis(Axis(1));
        let rrt = r_col.dot(&r_col.t());

        Self { r, t, rrt }
    }

    /// State dimension.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// Transition matrix `T` (r×r).
    pub(crate) fn t(&self) -> &Array2<f64> {
        &self.t
    }

    /// `R·Rᵀ` (r×r).
    pub(crate) fn rrt(&self) -> &Array2<f64> {
        &self.rrt
    }

    /// Advances a state by one step without noise, `T·a`.
    pub(crate) fn step(&self, a: &Array1<f64>) -> Array1<f64> {
        self.t.dot(a)
    }

    /// Unconditional state covariance `P` solving `P = T P Tᵀ + R Rᵀ`.
    ///
    /// Solved as `(I − T ⊗ T) vec(P) = vec(R Rᵀ)`. Returns `None` when the
    /// system is singular, i.e. the AR part has a root on the unit circle.
    pub(crate) fn stationary_covariance(&self) -> Option<Array2<f64>> {
        let r = self.r;
        let n = r * r;
        let mut lhs = Array2::<f64>::eye(n);
        for i in 0..r {
            for j in 0..r {
                for k in 0..r {
                    for l in 0..r {
                        lhs[[i * r + j, k * r + l]] -= self.t[[i, k]] * self.t[[j, l]];
                    }
                }
            }
        }
        let rhs = Array1::from_iter(self.rrt.iter().copied());
        let vec_p = linalg::solve(&lhs, &rhs)?;
        let p = vec_p.into_shape_with_order((r, r)).ok()?;
        // Symmetrise away round-off.
        Some((&p + &p.t()) * 0.5)
    }
}
