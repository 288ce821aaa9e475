//! Compare command: fit each candidate order and tabulate AIC/BIC.

use anyhow::Result;
use tracing::info_span;

use crate::cli::CommandArgs;
use crate::pipeline;
use crate::report::{self, CandidateTable};

/// Run the candidate comparison.
pub fn run(args: CommandArgs) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let inputs = pipeline::load(&args.config)?;
    let rows = pipeline::compare(&inputs, false)?.rows();
    println!("{}", CandidateTable(&rows));

    if let Some(path) = args.output {
        report::write_json(&path, &rows)?;
    }
    Ok(())
}
