//! Run command: the full pipeline, from raw counts to the JSON report.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::RunArgs;
use crate::pipeline;
use crate::report::{
    self, CandidateTable, ForecastTable, ModelSection, Report, ResidualSection, SeriesSection,
    StationaritySection, SummarySection,
};

/// Run every pipeline step and write the report.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    // 1. Series and descriptive statistics
    let inputs = pipeline::load(&args.config)?;
    let series = SeriesSection::from_series(&inputs.series);
    let summary = SummarySection::from_series(&inputs.series)?;
    println!("{summary}\n");

    // 2. Stationarity
    let stationarity = StationaritySection {
        differences: inputs.config.stationarity.differences,
        result: pipeline::stationarity(&inputs)?,
    };
    println!("{stationarity}\n");

    // 3. Candidate comparison
    let candidates = pipeline::compare(&inputs, args.parallel)?.rows();
    println!("{}\n", CandidateTable(&candidates));

    // 4. Chosen model and its residuals
    let session = pipeline::fit_order(&inputs)?;
    let model = ModelSection::from(session.fitted()?);
    println!("{model}\n");
    let residuals = ResidualSection::from(session.residuals()?);
    info!(
        mean = residuals.diagnostics.mean(),
        variance = residuals.diagnostics.variance(),
        "residual diagnostics"
    );

    // 5. Forecasts
    let forecasts = pipeline::forecasts(&inputs, &session)?;
    for fc in &forecasts {
        println!("{}\n", ForecastTable(fc));
    }

    let full = Report {
        series,
        summary,
        stationarity,
        candidates,
        model,
        residuals,
        forecasts,
    };
    report::write_json(&args.output, &full)
}
