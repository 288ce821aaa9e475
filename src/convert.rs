//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use urti_arima::{ArimaSpec, FitOptions};
use urti_series::MonthlyCounts;
use urti_stationarity::{AdfConfig, LagSelection};

/// Parses an ADF lag-selection rule name into the corresponding enum variant.
pub fn parse_lag_selection(s: &str) -> Result<LagSelection> {
    match s.to_lowercase().as_str() {
        "aic" => Ok(LagSelection::Aic),
        "bic" => Ok(LagSelection::Bic),
        "fixed" => Ok(LagSelection::Fixed),
        other => bail!("unknown autolag rule: {other:?}"),
    }
}

/// Converts a `[p, d, q]` triple into an [`ArimaSpec`].
pub fn parse_order(order: [usize; 3]) -> ArimaSpec {
    ArimaSpec::new(order[0], order[1], order[2])
}

/// Builds the [`MonthlyCounts`] table from the `[data]` section.
///
/// Exactly one of `start_year` or `years` must be set.
pub fn build_counts(data: &DataToml) -> Result<MonthlyCounts> {
    match (data.start_year, &data.years) {
        (Some(start), None) => Ok(MonthlyCounts::from_tracks(start, data.counts.clone())),
        (None, Some(years)) => {
            let counts = data
                .counts
                .iter()
                .fold(MonthlyCounts::new(years.clone()), |acc, (month, track)| {
                    acc.with_track(month.as_str(), track.clone())
                });
            Ok(counts)
        }
        (Some(_), Some(_)) => {
            bail!("[data] must have exactly one of start_year or years, got both")
        }
        (None, None) => {
            bail!("[data] must have exactly one of start_year or years, got neither")
        }
    }
}

/// Builds the candidate list from the `[model]` section.
pub fn build_candidates(model: &ModelToml) -> Result<Vec<ArimaSpec>> {
    if model.candidates.is_empty() {
        bail!("[model].candidates must list at least one order");
    }
    Ok(model.candidates.iter().copied().map(parse_order).collect())
}

/// Builds [`FitOptions`] from the `[model]` section.
pub fn build_fit_options(model: &ModelToml) -> Result<FitOptions> {
    let options = FitOptions::new()
        .with_max_iters(model.max_iters)
        .with_tolerance(model.tolerance)
        .with_initial_step(model.initial_step);
    options.validate()?;
    Ok(options)
}

/// Builds an [`AdfConfig`] from the `[stationarity]` section.
pub fn build_adf_config(stationarity: &StationarityToml) -> Result<AdfConfig> {
    let rule = parse_lag_selection(&stationarity.autolag)?;
    if rule == LagSelection::Fixed && stationarity.max_lag.is_none() {
        bail!("[stationarity] autolag = \"fixed\" requires max_lag");
    }
    let cfg = AdfConfig::new()
        .with_lag_selection(rule)
        .with_max_lag(stationarity.max_lag)
        .with_significance(stationarity.significance);
    cfg.validate()?;
    Ok(cfg)
}

/// Checks the `[forecast]` section: at least one horizon, all positive, and
/// a level strictly inside `(0, 1)`.
pub fn validate_forecast(forecast: &ForecastToml) -> Result<()> {
    if forecast.horizons.is_empty() {
        bail!("[forecast].horizons must list at least one horizon");
    }
    if let Some(h) = forecast.horizons.iter().find(|&&h| h == 0) {
        bail!("[forecast].horizons must be positive, got {h}");
    }
    if !(forecast.level > 0.0 && forecast.level < 1.0) {
        bail!("[forecast].level must be in (0, 1), got {}", forecast.level);
    }
    Ok(())
}
