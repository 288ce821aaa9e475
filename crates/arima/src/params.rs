//! Unconstrained parametrisation of ARMA polynomials.
//!
//! The optimizer searches over all of `ℝ^(p+q)`; these maps send each point
//! to AR coefficients of a stationary polynomial and MA coefficients of an
//! invertible one (Jones 1980, Monahan 1984).
//!
//! **Not part of the public API.**

/// Maps unconstrained values to the coefficients `φ` of a stationary
/// `1 − Σ φ_i Bⁱ`.
///
/// `tanh` sends each value to a partial autocorrelation in (-1, 1) and the
/// Levinson-Durbin recursion turns those into polynomial coefficients.
pub(crate) fn ar_from_unconstrained(alpha: &[f64]) -> Vec<f64> {
    let mut phi: Vec<f64> = Vec::with_capacity(alpha.len());
    for (k, a) in alpha.iter().enumerate() {
        let r = a.tanh();
        let prev = phi.clone();
        for j in 0..k {
            phi[j] = prev[j] - r * prev[k - 1 - j];
        }
        phi.push(r);
    }
    phi
}

/// Maps unconstrained values to the coefficients `θ` of an invertible
/// `1 + Σ θ_j Bʲ`.
pub(crate) fn ma_from_unconstrained(beta: &[f64]) -> Vec<f64> {
    ar_from_unconstrained(beta).into_iter().map(|c| -c).collect()
}
