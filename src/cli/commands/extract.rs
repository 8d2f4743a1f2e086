use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::args::ExtractArgs;
use crate::core::{HarvestContext, pipeline};

pub fn extract(args: ExtractArgs) -> Result<CommandResult> {
    let ctx = HarvestContext::new(&args.common.overrides(), args.common.verbose)?;
    let report = pipeline::extract(&ctx, args.apply)?;
    Ok(CommandResult::success(CommandSummary::Extract(report)))
}
