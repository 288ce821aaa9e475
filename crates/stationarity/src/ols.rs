//! Ordinary least squares for the unit-root regression.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};
use urti_stats::linalg;

/// Result of an OLS fit `y = X b + e`.
#[derive(Debug, Clone)]
pub(crate) struct OlsFit {
    coefficients: Array1<f64>,
    std_errors: Array1<f64>,
    ssr: f64,
    n: usize,
    k: usize,
}

impl OlsFit {
    /// Fits `y` on the columns of `x`.
    ///
    /// Returns `None` when there are no residual degrees of freedom or when
    /// `XᵀX` is singular.
    pub(crate) fn fit(y: &Array1<f64>, x: &Array2<f64>) -> Option<Self> {
        let (n, k) = x.dim();
        if y.len() != n || n <= k {
            return None;
        }
        let xtx = x.t().dot(x);
        let xty = x.t().dot(y);
        let xtx_inv = linalg::invert(&xtx)?;
        let coefficients = xtx_inv.dot(&xty);

        let fitted = x.dot(&coefficients);
        let ssr: f64 = y
            .iter()
            .zip(fitted.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        let sigma2 = ssr / (n - k) as f64;
        let std_errors = xtx_inv.diag().mapv(|v| (sigma2 * v).max(0.0).sqrt());

        Some(Self {
            coefficients,
            std_errors,
            ssr,
            n,
            k,
        })
    }

    /// t-ratio of coefficient `i`.
    pub(crate) fn t_value(&self, i: usize) -> f64 {
        self.coefficients[i] / self.std_errors[i]
    }

    /// Gaussian log-likelihood at the OLS estimate.
    pub(crate) fn log_likelihood(&self) -> f64 {
        let n = self.n as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    /// Akaike information criterion, `-2 logL + 2k`.
    pub(crate) fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.k as f64
    }

    /// Bayesian information criterion, `-2 logL + k ln n`.
    pub(crate) fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood() + self.k as f64 * (self.n as f64).ln()
    }
}
