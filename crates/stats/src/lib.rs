//! Statistical helper functions for monthly count series.
//!
//! Descriptive moments follow the bias-corrected sample definitions used by
//! common data-frame libraries, so that reported numbers line up with what
//! analysts see in their notebooks.

pub mod linalg;

use serde::Serialize;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Sums of squared, cubed and fourth-power deviations from the mean.
fn central_sums(data: &[f64]) -> (f64, f64, f64) {
    let m = mean(data);
    data.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - m;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    })
}

/// Adjusted Fisher-Pearson sample skewness.
///
/// `G1 = n * sqrt(n - 1) / (n - 2) * m3 / m2^1.5` where `m2`, `m3` are sums
/// of squared and cubed deviations.
///
/// Returns `None` for fewer than 3 elements or zero variance.
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let (s2, s3, _) = central_sums(data);
    if s2 <= 0.0 {
        return None;
    }
    let nf = n as f64;
    Some(nf * (nf - 1.0).sqrt() / (nf - 2.0) * s3 / s2.powf(1.5))
}

/// Bias-corrected sample excess kurtosis.
///
/// Zero for normally distributed data in expectation.
///
/// Returns `None` for fewer than 4 elements or zero variance.
pub fn kurtosis(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let (s2, _, s4) = central_sums(data);
    if s2 <= 0.0 {
        return None;
    }
    let nf = n as f64;
    let adj = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
    let num = nf * (nf + 1.0) * (nf - 1.0) * s4;
    let den = (nf - 2.0) * (nf - 3.0) * s2 * s2;
    Some(num / den - adj)
}

/// R's default quantile algorithm (type=7).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// First four moments of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance (N-1 denominator).
    pub variance: f64,
    /// Adjusted Fisher-Pearson skewness, if defined.
    pub skewness: Option<f64>,
    /// Bias-corrected excess kurtosis, if defined.
    pub kurtosis: Option<f64>,
}

/// Computes [`Moments`] for `data`.
pub fn moments(data: &[f64]) -> Moments {
    Moments {
        n: data.len(),
        mean: mean(data),
        variance: variance(data),
        skewness: skewness(data),
        kurtosis: kurtosis(data),
    }
}

/// Five-number summary plus count, mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarises `data`; quartiles use [`quantile_type7`].
///
/// Non-finite values are ignored. Returns `None` if no finite value remains.
pub fn describe(data: &[f64]) -> Option<Summary> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(Summary {
        count: sorted.len(),
        mean: mean(&sorted),
        std: sd(&sorted),
        min: sorted[0],
        q25: quantile_type7(&sorted, 0.25),
        median: median(&sorted),
        q75: quantile_type7(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge; exclusive, except for the last bin.
    pub upper: f64,
    /// Number of values falling in the bin.
    pub count: usize,
}

/// Equal-width histogram over `[min, max]` of the finite values in `data`.
///
/// A constant sample is spread over `[x - 0.5, x + 0.5]`. Returns an empty
/// vector when `bins == 0` or no finite value is present.
pub fn histogram(data: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }
    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &x in &finite {
        let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

/// Applies `d`-fold first differencing.
///
/// Each pass replaces the sequence by `x[t] - x[t-1]`, shortening it by one.
/// Returns an empty vector once the input is exhausted.
pub fn difference(data: &[f64], d: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..d {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_basic() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // variance = sd^2 = 2.138090^2 ≈ 4.571429
        assert_relative_eq!(variance(&data), 4.571429, epsilon = 1e-4);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_skewness_known_values() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(skewness(&data).unwrap(), 0.818487553, epsilon = 1e-8);
        let data = [1.0, 2.0, 3.0, 4.0, 10.0];
        assert_relative_eq!(skewness(&data).unwrap(), 1.697056275, epsilon = 1e-8);
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        assert_relative_eq!(skewness(&[1.0, 2.0, 3.0]).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_undefined() {
        assert!(skewness(&[1.0, 2.0]).is_none());
        assert!(skewness(&[3.0, 3.0, 3.0]).is_none());
    }

    #[test]
    fn test_kurtosis_known_values() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(kurtosis(&data).unwrap(), 0.940625, epsilon = 1e-8);
        let data = [1.0, 2.0, 3.0, 4.0, 10.0];
        assert_relative_eq!(kurtosis(&data).unwrap(), 3.152, epsilon = 1e-8);
    }

    #[test]
    fn test_kurtosis_undefined() {
        assert!(kurtosis(&[1.0, 2.0, 3.0]).is_none());
        assert!(kurtosis(&[1.0, 1.0, 1.0, 1.0]).is_none());
    }

    #[test]
    fn test_moments_bundle() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = moments(&data);
        assert_eq!(m.n, 8);
        assert_relative_eq!(m.mean, 5.0, epsilon = 1e-12);
        assert_relative_eq!(m.variance, 32.0 / 7.0, epsilon = 1e-12);
        assert!(m.skewness.is_some());
        assert!(m.kurtosis.is_some());
    }

    #[test]
    fn test_quantile_type7() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.25), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_r_crossvalidation() {
        // R: quantile(1:10, 0.3, type=7) = 3.7
        let sorted: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(quantile_type7(&sorted, 0.3), 3.7, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_median_odd() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0]), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_median_even() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_describe_unsorted_input() {
        let s = describe(&[10.0, 1.0, 4.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.count, 5);
        assert_relative_eq!(s.mean, 4.0, epsilon = 1e-12);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.q25, 2.0);
        assert_relative_eq!(s.median, 3.0);
        assert_relative_eq!(s.q75, 4.0);
        assert_relative_eq!(s.max, 10.0);
    }

    #[test]
    fn test_describe_empty() {
        assert!(describe(&[]).is_none());
        assert!(describe(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_histogram_counts_sum() {
        let data: Vec<f64> = (0..100).map(|x| x as f64).collect();
        let bins = histogram(&data, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert!(bins.iter().all(|b| b.count == 5));
        assert_relative_eq!(bins[0].lower, 0.0);
        assert_relative_eq!(bins[19].upper, 99.0);
    }

    #[test]
    fn test_histogram_max_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0], 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
    }

    #[test]
    fn test_histogram_constant() {
        let bins = histogram(&[3.0, 3.0], 4);
        assert_eq!(bins.len(), 4);
        assert_relative_eq!(bins[0].lower, 2.5);
        assert_relative_eq!(bins[3].upper, 3.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert!(histogram(&[], 5).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }

    #[test]
    fn test_difference() {
        let data = [1.0, 4.0, 9.0, 16.0];
        assert_eq!(difference(&data, 0), vec![1.0, 4.0, 9.0, 16.0]);
        assert_eq!(difference(&data, 1), vec![3.0, 5.0, 7.0]);
        assert_eq!(difference(&data, 2), vec![2.0, 2.0]);
    }

    #[test]
    fn test_difference_exhausts() {
        assert!(difference(&[1.0], 1).is_empty());
        assert!(difference(&[1.0, 2.0], 3).is_empty());
    }
}
