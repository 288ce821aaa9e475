//! Check command: augmented Dickey-Fuller test on the differenced series.

use anyhow::Result;
use tracing::info_span;

use crate::cli::CommandArgs;
use crate::pipeline;
use crate::report::{self, StationaritySection};

/// Run the stationarity check.
pub fn run(args: CommandArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let inputs = pipeline::load(&args.config)?;
    let section = StationaritySection {
        differences: inputs.config.stationarity.differences,
        result: pipeline::stationarity(&inputs)?,
    };
    println!("{section}");

    if let Some(path) = args.output {
        report::write_json(&path, &section)?;
    }
    Ok(())
}
