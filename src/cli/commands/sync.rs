use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::args::SyncArgs;
use crate::core::{HarvestContext, pipeline};

pub fn sync(args: SyncArgs) -> Result<CommandResult> {
    let ctx = HarvestContext::new(&args.common.overrides(), args.common.verbose)?;
    let report = pipeline::sync(&ctx, args.apply)?;
    Ok(CommandResult::success(CommandSummary::Sync(report)))
}
