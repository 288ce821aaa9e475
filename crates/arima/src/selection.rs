//! Side-by-side comparison of candidate ARIMA orders.
//!
//! Every candidate is fitted independently. A failing candidate is recorded
//! with its error and never aborts the comparison; choosing among the
//! converged candidates is left to the caller.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use urti_series::TimeSeries;

use crate::config::FitOptions;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::spec::ArimaSpec;

/// Candidate orders compared by default.
pub const DEFAULT_CANDIDATES: [ArimaSpec; 3] = [
    ArimaSpec::new(1, 1, 1),
    ArimaSpec::new(2, 1, 0),
    ArimaSpec::new(3, 1, 0),
];

/// Outcome of fitting one candidate.
#[derive(Debug, Clone)]
pub struct CandidateReport {
    spec: ArimaSpec,
    result: Result<ArimaFit, ArimaError>,
}

impl CandidateReport {
    /// The candidate's order.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// The fit, or the reason it failed.
    pub fn result(&self) -> &Result<ArimaFit, ArimaError> {
        &self.result
    }

    /// The fit, if it converged.
    pub fn fit(&self) -> Option<&ArimaFit> {
        self.result.as_ref().ok()
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ArimaError> {
        self.result.as_ref().err()
    }

    /// `true` when the candidate was fitted.
    pub fn converged(&self) -> bool {
        self.result.is_ok()
    }

    /// AIC of a converged candidate.
    pub fn aic(&self) -> Option<f64> {
        self.fit().map(ArimaFit::aic)
    }

    /// BIC of a converged candidate.
    pub fn bic(&self) -> Option<f64> {
        self.fit().map(ArimaFit::bic)
    }

    /// Flat export row.
    pub fn row(&self) -> CandidateRow {
        CandidateRow {
            spec: self.spec,
            aic: self.aic(),
            bic: self.bic(),
            log_likelihood: self.fit().map(ArimaFit::log_likelihood),
            converged: self.converged(),
            error: self.error().map(ToString::to_string),
        }
    }
}

/// Report row `(spec, aic, bic, converged, error)` for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRow {
    pub spec: ArimaSpec,
    pub aic: Option<f64>,
    pub bic: Option<f64>,
    pub log_likelihood: Option<f64>,
    pub converged: bool,
    pub error: Option<String>,
}

/// Per-candidate results, in the order the candidates were given.
#[derive(Debug, Clone)]
pub struct CandidateComparison {
    reports: Vec<CandidateReport>,
}

impl CandidateComparison {
    /// All candidate reports.
    pub fn reports(&self) -> &[CandidateReport] {
        &self.reports
    }

    /// Export rows.
    pub fn rows(&self) -> Vec<CandidateRow> {
        self.reports.iter().map(CandidateReport::row).collect()
    }

    /// Number of candidates that were fitted.
    pub fn n_converged(&self) -> usize {
        self.reports.iter().filter(|r| r.converged()).count()
    }

    /// `true` when no candidate could be fitted (also for an empty list).
    pub fn all_failed(&self) -> bool {
        self.n_converged() == 0
    }

    /// Report for `spec`, if it was a candidate.
    pub fn get(&self, spec: ArimaSpec) -> Option<&CandidateReport> {
        self.reports.iter().find(|r| r.spec == spec)
    }
}

fn evaluate(series: &TimeSeries, spec: ArimaSpec, options: &FitOptions) -> CandidateReport {
    let result = spec.fit_with(series, options);
    match &result {
        Ok(fit) => info!(%spec, aic = fit.aic(), bic = fit.bic(), "candidate fitted"),
        Err(e) => warn!(%spec, error = %e, "candidate failed"),
    }
    CandidateReport { spec, result }
}

/// Fits every candidate in turn.
///
/// # Example
///
/// ```ignore
/// let comparison = compare_candidates(&series, &DEFAULT_CANDIDATES, &FitOptions::default());
/// for row in comparison.rows() {
///     println!("{} AIC={:?} BIC={:?}", row.spec, row.aic, row.bic);
/// }
/// ```
#[tracing::instrument(skip_all, fields(n_candidates = candidates.len()))]
pub fn compare_candidates(
    series: &TimeSeries,
    candidates: &[ArimaSpec],
    options: &FitOptions,
) -> CandidateComparison {
    let reports = candidates
        .iter()
        .map(|&spec| evaluate(series, spec, options))
        .collect();
    CandidateComparison { reports }
}

/// Same as [`compare_candidates`], fitting candidates on the rayon pool.
#[tracing::instrument(skip_all, fields(n_candidates = candidates.len()))]
pub fn compare_candidates_par(
    series: &TimeSeries,
    candidates: &[ArimaSpec],
    options: &FitOptions,
) -> CandidateComparison {
    let reports = candidates
        .par_iter()
        .map(|&spec| evaluate(series, spec, options))
        .collect();
    CandidateComparison { reports }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urti_calendar::{Month, YearMonth};

    fn short_series() -> TimeSeries {
        TimeSeries::from_values(
            YearMonth::new(2010, Month::Jan),
            vec![3.0, 5.0, 4.0, 8.0, 6.0, 9.0, 7.0, 10.0],
        )
        .unwrap()
    }

    #[test]
    fn default_candidates_order() {
        assert_eq!(DEFAULT_CANDIDATES[0].to_string(), "ARIMA(1,1,1)");
        assert_eq!(DEFAULT_CANDIDATES[2].to_string(), "ARIMA(3,1,0)");
    }

    #[test]
    fn failures_recorded_per_candidate() {
        let candidates = [ArimaSpec::new(0, 1, 0), ArimaSpec::new(6, 1, 6)];
        let cmp = compare_candidates(&short_series(), &candidates, &FitOptions::default());
        assert_eq!(cmp.reports().len(), 2);
        assert_eq!(cmp.n_converged(), 1);
        assert!(!cmp.all_failed());

        let failed = cmp.get(ArimaSpec::new(6, 1, 6)).unwrap();
        assert!(matches!(failed.error(), Some(ArimaError::SingularMatrix { .. })));
        let row = failed.row();
        assert!(!row.converged);
        assert!(row.aic.is_none());
        assert!(row.error.unwrap().starts_with("singular matrix"));
    }

    #[test]
    fn non_convergence_recorded_next_to_converged() {
        let candidates = [ArimaSpec::new(0, 1, 0), ArimaSpec::new(2, 1, 1)];
        let opts = FitOptions::new().with_max_iters(2);
        let cmp = compare_candidates(&short_series(), &candidates, &opts);
        assert_eq!(cmp.n_converged(), 1);
        assert!(cmp.get(ArimaSpec::new(0, 1, 0)).unwrap().converged());

        let failed = cmp.get(ArimaSpec::new(2, 1, 1)).unwrap();
        assert!(matches!(failed.error(), Some(ArimaError::NonConvergence { .. })));
        let row = failed.row();
        assert!(!row.converged);
        assert!(row.bic.is_none());
    }

    #[test]
    fn empty_candidate_list_counts_as_all_failed() {
        let cmp = compare_candidates(&short_series(), &[], &FitOptions::default());
        assert!(cmp.all_failed());
        assert!(cmp.rows().is_empty());
    }

    #[test]
    fn row_serializes_spec_inline() {
        let cmp = compare_candidates(&short_series(), &[ArimaSpec::new(0, 1, 0)], &FitOptions::default());
        let json = serde_json::to_value(cmp.rows()).unwrap();
        assert_eq!(json[0]["spec"]["p"], 0);
        assert_eq!(json[0]["converged"], true);
        assert!(json[0]["aic"].is_number());
    }
}
