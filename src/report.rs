//! JSON report sections and their console rendering.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use urti_arima::{ArimaFit, ArimaSpec, CandidateRow, Forecast, ResidualDiagnostics};
use urti_calendar::YearMonth;
use urti_series::{SeriesPoint, TimeSeries};
use urti_stationarity::AdfResult;
use urti_stats::{HistogramBin, Summary};

/// Number of bins in the residual histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Complete output of `urti run`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub series: SeriesSection,
    pub summary: SummarySection,
    pub stationarity: StationaritySection,
    pub candidates: Vec<CandidateRow>,
    pub model: ModelSection,
    pub residuals: ResidualSection,
    pub forecasts: Vec<Forecast>,
}

/// The observed series, ready for plotting.
#[derive(Debug, Serialize)]
pub struct SeriesSection {
    pub first: YearMonth,
    pub last: YearMonth,
    pub n_obs: usize,
    pub gaps: Vec<YearMonth>,
    pub points: Vec<SeriesPoint>,
}

impl SeriesSection {
    pub fn from_series(series: &TimeSeries) -> Self {
        Self {
            first: series.first(),
            last: series.last(),
            n_obs: series.len(),
            gaps: series.gaps(),
            points: series.points().collect(),
        }
    }
}

/// Descriptive statistics of the raw counts.
#[derive(Debug, Serialize)]
pub struct SummarySection {
    #[serde(flatten)]
    pub summary: Summary,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
}

impl SummarySection {
    pub fn from_series(series: &TimeSeries) -> Result<Self> {
        let values = series.values();
        let summary =
            urti_stats::describe(values).context("no finite values to summarise")?;
        Ok(Self {
            summary,
            skewness: urti_stats::skewness(values),
            kurtosis: urti_stats::kurtosis(values),
        })
    }
}

/// ADF outcome and the differencing order it was run at.
#[derive(Debug, Serialize)]
pub struct StationaritySection {
    pub differences: usize,
    #[serde(flatten)]
    pub result: AdfResult,
}

/// Estimated parameters and information criteria of the chosen model.
#[derive(Debug, Serialize)]
pub struct ModelSection {
    pub spec: ArimaSpec,
    pub ar: Vec<f64>,
    pub ma: Vec<f64>,
    pub mean: Option<f64>,
    pub sigma2: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub n_obs: usize,
    pub n_params: usize,
    pub iterations: u64,
}

impl From<&ArimaFit> for ModelSection {
    fn from(fit: &ArimaFit) -> Self {
        let spec = fit.spec();
        Self {
            spec,
            ar: fit.ar().to_vec(),
            ma: fit.ma().to_vec(),
            mean: spec.includes_mean().then(|| fit.mean()),
            sigma2: fit.sigma2(),
            log_likelihood: fit.log_likelihood(),
            aic: fit.aic(),
            bic: fit.bic(),
            n_obs: fit.n_obs(),
            n_params: fit.n_params(),
            iterations: fit.iterations(),
        }
    }
}

/// Residual sequence, moments and histogram.
#[derive(Debug, Serialize)]
pub struct ResidualSection {
    pub diagnostics: ResidualDiagnostics,
    pub histogram: Vec<HistogramBin>,
}

impl From<ResidualDiagnostics> for ResidualSection {
    fn from(diagnostics: ResidualDiagnostics) -> Self {
        let histogram = diagnostics.histogram(HISTOGRAM_BINS);
        Self {
            diagnostics,
            histogram,
        }
    }
}

/// Serializes `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.4}"))
}

impl fmt::Display for SummarySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Descriptive statistics:")?;
        writeln!(f, "  count  {}", s.count)?;
        writeln!(f, "  mean   {:.4}", s.mean)?;
        writeln!(f, "  std    {:.4}", s.std)?;
        writeln!(f, "  min    {:.1}", s.min)?;
        writeln!(f, "  25%    {:.2}", s.q25)?;
        writeln!(f, "  50%    {:.2}", s.median)?;
        writeln!(f, "  75%    {:.2}", s.q75)?;
        writeln!(f, "  max    {:.1}", s.max)?;
        writeln!(f, "Skewness: {}", fmt_opt(self.skewness))?;
        write!(f, "Kurtosis: {}", fmt_opt(self.kurtosis))
    }
}

impl fmt::Display for StationaritySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "ADF statistic: {:.4}", r.statistic)?;
        writeln!(f, "p-value: {:.4e}", r.p_value)?;
        writeln!(f, "Lags used: {}, observations: {}", r.used_lag, r.n_obs)?;
        writeln!(
            f,
            "Critical values: 1%={:.3} 5%={:.3} 10%={:.3}",
            r.critical_values.one_pct, r.critical_values.five_pct, r.critical_values.ten_pct
        )?;
        let verdict = if r.stationary {
            "stationary"
        } else {
            "non-stationary"
        };
        write!(f, "Series is {verdict} after {} difference(s).", self.differences)
    }
}

/// Console table of candidate rows.
pub struct CandidateTable<'a>(pub &'a [CandidateRow]);

impl fmt::Display for CandidateTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {:>10} {:>10}", "model", "AIC", "BIC")?;
        for row in self.0 {
            write!(f, "\n{:<14} ", row.spec.to_string())?;
            match (row.aic, row.bic, &row.error) {
                (Some(aic), Some(bic), _) => write!(f, "{aic:>10.2} {bic:>10.2}")?,
                (_, _, Some(e)) => write!(f, "failed: {e}")?,
                _ => write!(f, "failed")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ModelSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} on {} observations", self.spec, self.n_obs)?;
        for (i, phi) in self.ar.iter().enumerate() {
            writeln!(f, "  ar.L{}    {phi:.4}", i + 1)?;
        }
        for (i, theta) in self.ma.iter().enumerate() {
            writeln!(f, "  ma.L{}    {theta:.4}", i + 1)?;
        }
        if let Some(mean) = self.mean {
            writeln!(f, "  const   {mean:.4}")?;
        }
        writeln!(f, "  sigma2  {:.4}", self.sigma2)?;
        writeln!(f, "Log likelihood: {:.3}", self.log_likelihood)?;
        write!(f, "AIC: {:.2}, BIC: {:.2}", self.aic, self.bic)
    }
}

/// Console table of one forecast, rounded to whole cases.
pub struct ForecastTable<'a>(pub &'a Forecast);

impl fmt::Display for ForecastTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fc = self.0;
        writeln!(
            f,
            "{}-month forecast, {}, {:.0}% intervals:",
            fc.len(),
            fc.spec(),
            fc.level() * 100.0
        )?;
        write!(f, "{:<8} {:>9} {:>9} {:>9}", "month", "forecast", "lower", "upper")?;
        for p in fc.points() {
            write!(
                f,
                "\n{:<8} {:>9.0} {:>9.0} {:>9.0}",
                p.timestamp.to_string(),
                p.point,
                p.lower,
                p.upper
            )?;
        }
        Ok(())
    }
}
