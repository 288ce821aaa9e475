//! MacKinnon response surfaces for the constant-only Dickey-Fuller test.

use serde::Serialize;
use statrs::function::erf::erfc;

// MacKinnon (1994), one integrated series, regression with a constant.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALLP: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGEP: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

// MacKinnon (2010), constant-only, coefficients of 1/n^i for i = 0..=3.
const CRIT_1PCT: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5PCT: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10PCT: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Dickey-Fuller critical values at the conventional levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalValues {
    /// 1% critical value.
    #[serde(rename = "1%")]
    pub one_pct: f64,
    /// 5% critical value.
    #[serde(rename = "5%")]
    pub five_pct: f64,
    /// 10% critical value.
    #[serde(rename = "10%")]
    pub ten_pct: f64,
}

fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Approximate p-value of a constant-only Dickey-Fuller t-statistic.
///
/// Statistics above 2.74 map to 1 and statistics below -18.83 map to 0.
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let coeffs: &[f64] = if statistic <= TAU_STAR {
        &TAU_SMALLP
    } else {
        &TAU_LARGEP
    };
    normal_cdf(polyval(coeffs, statistic))
}

/// Finite-sample critical values for a regression on `n_obs` observations.
pub fn mackinnon_critical_values(n_obs: usize) -> CriticalValues {
    let inv = 1.0 / n_obs.max(1) as f64;
    let surface = |b: &[f64; 4]| b[0] + b[1] * inv + b[2] * inv * inv + b[3] * inv * inv * inv;
    CriticalValues {
        one_pct: surface(&CRIT_1PCT),
        five_pct: surface(&CRIT_5PCT),
        ten_pct: surface(&CRIT_10PCT),
    }
}
