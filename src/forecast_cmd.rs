//! Forecast command: fit `[model].order` and forecast every horizon.

use anyhow::Result;
use tracing::info_span;

use crate::cli::CommandArgs;
use crate::pipeline;
use crate::report::{self, ForecastTable, ModelSection};

/// Run the fit and forecasts.
pub fn run(args: CommandArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let inputs = pipeline::load(&args.config)?;
    let session = pipeline::fit_order(&inputs)?;
    println!("{}\n", ModelSection::from(session.fitted()?));

    let forecasts = pipeline::forecasts(&inputs, &session)?;
    for fc in &forecasts {
        println!("{}\n", ForecastTable(fc));
    }

    if let Some(path) = args.output {
        report::write_json(&path, &forecasts)?;
    }
    Ok(())
}
