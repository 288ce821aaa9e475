//! Integration tests for urti-stationarity.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use urti_stationarity::{
    AdfConfig, LagSelection, StationarityError, adf_test, check_stationarity,
};

fn white_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn random_walk_with_drift(drift: f64, n: usize, seed: u64) -> Vec<f64> {
    let shocks = white_noise(n, seed);
    let mut level = 100.0;
    shocks
        .into_iter()
        .map(|e| {
            level += drift + e;
            level
        })
        .collect()
}

#[test]
fn white_noise_is_stationary() {
    let data = white_noise(400, 7);
    let result = adf_test(&data, &AdfConfig::default()).unwrap();
    assert!(result.stationary);
    assert!(result.p_value < 0.01);
    assert!(result.statistic < result.critical_values.one_pct);
}

#[test]
fn differencing_lowers_p_value_for_trending_series() {
    let data = random_walk_with_drift(1.5, 190, 11);
    let config = AdfConfig::default();
    let levels = check_stationarity(&data, 0, &config).unwrap();
    let differenced = check_stationarity(&data, 1, &config).unwrap();
    assert!(
        differenced.p_value < levels.p_value,
        "levels p={}, differenced p={}",
        levels.p_value,
        differenced.p_value
    );
    assert!(differenced.stationary);
}

#[test]
fn fixed_lag_is_used_verbatim() {
    let data = white_noise(120, 3);
    let config = AdfConfig::new()
        .with_lag_selection(LagSelection::Fixed)
        .with_max_lag(Some(4));
    let result = adf_test(&data, &config).unwrap();
    assert_eq!(result.used_lag, 4);
    assert_eq!(result.n_obs, 120 - 1 - 4);
}

#[test]
fn automatic_lag_within_bounds() {
    let data = white_noise(200, 5);
    for rule in [LagSelection::Aic, LagSelection::Bic] {
        let config = AdfConfig::new().with_lag_selection(rule);
        let result = adf_test(&data, &config).unwrap();
        assert!(result.used_lag <= 15);
        assert_eq!(result.n_obs, 199 - result.used_lag);
    }
}

#[test]
fn bic_never_picks_more_lags_than_aic_on_white_noise() {
    let data = white_noise(300, 21);
    let aic = adf_test(&data, &AdfConfig::new()).unwrap();
    let bic = adf_test(&data, &AdfConfig::new().with_lag_selection(LagSelection::Bic)).unwrap();
    assert!(bic.used_lag <= aic.used_lag);
}

#[test]
fn too_short_for_requested_lag() {
    let data = white_noise(10, 1);
    let config = AdfConfig::new().with_max_lag(Some(4));
    let err = adf_test(&data, &config).unwrap_err();
    assert_eq!(err, StationarityError::InsufficientData { n: 10, min: 12 });
}

#[test]
fn too_short_for_any_regression() {
    let err = adf_test(&[1.0, 2.0, 4.0], &AdfConfig::default()).unwrap_err();
    assert_eq!(err, StationarityError::InsufficientData { n: 3, min: 4 });
}

#[test]
fn constant_series_is_singular() {
    let data = vec![5.0; 50];
    let err = adf_test(&data, &AdfConfig::default()).unwrap_err();
    assert_eq!(err, StationarityError::SingularRegression);
}

#[test]
fn non_finite_rejected() {
    let mut data = white_noise(50, 2);
    data[10] = f64::NAN;
    let err = adf_test(&data, &AdfConfig::default()).unwrap_err();
    assert_eq!(err, StationarityError::NonFiniteData);
}

#[test]
fn result_serializes_critical_values_by_level() {
    let data = white_noise(100, 9);
    let result = adf_test(&data, &AdfConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["critical_values"]["5%"].is_number());
    assert_eq!(json["used_lag"], result.used_lag);
}
