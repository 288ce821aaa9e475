//! Pipeline steps shared by the subcommands.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use urti_arima::{
    CandidateComparison, FitSession, Forecast, compare_candidates, compare_candidates_par,
};
use urti_series::{TimeSeries, build_series};
use urti_stationarity::{AdfResult, check_stationarity};

use crate::config::{self, UrtiConfig};
use crate::convert;

/// Parsed configuration together with the series it describes.
pub struct Inputs {
    pub config: UrtiConfig,
    pub series: TimeSeries,
}

/// Loads the TOML config at `path` and assembles the series.
pub fn load(path: &Path) -> Result<Inputs> {
    let config = config::load(path)?;
    let counts = convert::build_counts(&config.data)?;
    let series = build_series(&counts).context("failed to assemble monthly series")?;
    info!(
        n_obs = series.len(),
        first = %series.first(),
        last = %series.last(),
        contiguous = series.is_contiguous(),
        "series assembled"
    );
    Ok(Inputs { config, series })
}

/// Runs the ADF test on the series differenced `[stationarity].differences`
/// times.
pub fn stationarity(inputs: &Inputs) -> Result<AdfResult> {
    let section = &inputs.config.stationarity;
    let adf = convert::build_adf_config(section)?;
    let result = check_stationarity(inputs.series.values(), section.differences, &adf)
        .context("stationarity test failed")?;
    if !result.stationary {
        warn!(
            differences = section.differences,
            p_value = result.p_value,
            "series is not stationary at the configured significance"
        );
    }
    Ok(result)
}

/// Fits every configured candidate.
///
/// # Errors
///
/// Fails only when every candidate failed; individual failures are kept in
/// the comparison.
pub fn compare(inputs: &Inputs, parallel: bool) -> Result<CandidateComparison> {
    let candidates = convert::build_candidates(&inputs.config.model)?;
    let options = convert::build_fit_options(&inputs.config.model)?;
    let comparison = if parallel {
        compare_candidates_par(&inputs.series, &candidates, &options)
    } else {
        compare_candidates(&inputs.series, &candidates, &options)
    };
    if comparison.all_failed() {
        bail!("all {} candidate models failed to fit", candidates.len());
    }
    Ok(comparison)
}

/// Fits `[model].order`.
pub fn fit_order(inputs: &Inputs) -> Result<FitSession> {
    let spec = convert::parse_order(inputs.config.model.order);
    let options = convert::build_fit_options(&inputs.config.model)?;
    let mut session = FitSession::new(spec).with_options(options);
    let fit = session
        .fit(&inputs.series)
        .with_context(|| format!("failed to fit {spec}"))?;
    info!(
        %spec,
        aic = fit.aic(),
        bic = fit.bic(),
        iterations = fit.iterations(),
        "model fitted"
    );
    Ok(session)
}

/// Forecasts every `[forecast].horizons` entry from a fitted session.
pub fn forecasts(inputs: &Inputs, session: &FitSession) -> Result<Vec<Forecast>> {
    let section = &inputs.config.forecast;
    convert::validate_forecast(section)?;
    section
        .horizons
        .iter()
        .map(|&h| {
            session
                .forecast_with_level(h, section.level)
                .with_context(|| format!("failed to forecast {h} months ahead"))
        })
        .collect()
}
