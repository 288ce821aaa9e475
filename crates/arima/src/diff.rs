//! Differencing bookkeeping for forecasting on the original scale.
//!
//! **Not part of the public API.**

/// Last value of every differencing level `0..d` of `values`.
///
/// Entry `k` is the final element of the `k`-times differenced series, which
/// is the starting point when integrating forecasts back through level `k`.
pub(crate) fn last_values(values: &[f64], d: usize) -> Vec<f64> {
    (0..d)
        .map(|k| {
            urti_stats::difference(values, k)
                .last()
                .copied()
                .unwrap_or(0.0)
        })
        .collect()
}

/// Integrates forecasts of the `d`-times differenced series, where
/// `d = last.len()`, back to the original scale.
pub(crate) fn integrate(differenced: &[f64], last: &[f64]) -> Vec<f64> {
    let mut result = differenced.to_vec();
    for &start in last.iter().rev() {
        let mut level = start;
        for x in result.iter_mut() {
            level += *x;
            *x = level;
        }
    }
    result
}

/// AR coefficients of `φ(B)(1 − B)^d`, written as `1 − Σ φ*_i Bⁱ`.
pub(crate) fn integrated_ar(ar: &[f64], d: usize) -> Vec<f64> {
    // Lag polynomial coefficients, constant term first.
    let mut poly: Vec<f64> = std::iter::once(1.0).chain(ar.iter().map(|a| -a)).collect();
    for _ in 0..d {
        let mut next = vec![0.0; poly.len() + 1];
        for (i, &c) in poly.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c;
        }
        poly = next;
    }
    poly[1..].iter().map(|c| -c).collect()
}

/// First `h` impulse-response (ψ) weights of `φ*(B) y = θ(B) ε`.
pub(crate) fn psi_weights(ar: &[f64], ma: &[f64], h: usize) -> Vec<f64> {
    let mut psi = Vec::with_capacity(h);
    for j in 0..h {
        let mut value = if j == 0 {
            1.0
        } else {
            ma.get(j - 1).copied().unwrap_or(0.0)
        };
        for (i, phi) in ar.iter().enumerate().take(j) {
            value += phi * psi[j - 1 - i];
        }
        psi.push(value);
    }
    psi
}
