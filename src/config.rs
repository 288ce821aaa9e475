use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level URTI configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrtiConfig {
    /// Observation table.
    pub data: DataToml,

    /// Candidate and chosen model orders.
    #[serde(default)]
    pub model: ModelToml,

    /// Forecast horizons and interval level.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Unit-root test settings.
    #[serde(default)]
    pub stationarity: StationarityToml,
}

/// Month-by-year count table.
///
/// The year list is either given explicitly via `years` or derived from
/// `start_year` and the longest month track. Exactly one must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub years: Option<Vec<i32>>,
    /// Month abbreviation -> counts indexed by year offset.
    pub counts: BTreeMap<String, Vec<u32>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_candidates")]
    pub candidates: Vec<[usize; 3]>,
    #[serde(default = "default_order")]
    pub order: [usize; 3],
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_initial_step")]
    pub initial_step: f64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            order: default_order(),
            max_iters: default_max_iters(),
            tolerance: default_tolerance(),
            initial_step: default_initial_step(),
        }
    }
}

fn default_candidates() -> Vec<[usize; 3]> {
    vec![[1, 1, 1], [2, 1, 0], [3, 1, 0]]
}
fn default_order() -> [usize; 3] {
    [3, 1, 0]
}
fn default_max_iters() -> u64 {
    1000
}
fn default_tolerance() -> f64 {
    1e-8
}
fn default_initial_step() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_horizons")]
    pub horizons: Vec<usize>,
    #[serde(default = "default_level")]
    pub level: f64,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            horizons: default_horizons(),
            level: default_level(),
        }
    }
}

fn default_horizons() -> Vec<usize> {
    vec![6, 12]
}
fn default_level() -> f64 {
    0.95
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationarityToml {
    #[serde(default = "default_differences")]
    pub differences: usize,
    #[serde(default = "default_significance")]
    pub significance: f64,
    #[serde(default = "default_autolag")]
    pub autolag: String,
    #[serde(default)]
    pub max_lag: Option<usize>,
}

impl Default for StationarityToml {
    fn default() -> Self {
        Self {
            differences: default_differences(),
            significance: default_significance(),
            autolag: default_autolag(),
            max_lag: None,
        }
    }
}

fn default_differences() -> usize {
    1
}
fn default_significance() -> f64 {
    0.05
}
fn default_autolag() -> String {
    "aic".to_string()
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<UrtiConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
