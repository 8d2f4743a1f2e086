use anyhow::Result;

use super::{ClassifiedText, CommandResult, CommandSummary};
use crate::cli::{ExitStatus, args::ClassifyArgs};
use crate::core::HarvestContext;

/// Classifies each text with the project's ignore patterns applied.
pub fn classify(args: ClassifyArgs) -> Result<CommandResult> {
    let ctx = HarvestContext::new(&args.common.overrides(), args.common.verbose)?;

    let results: Vec<ClassifiedText> = args
        .texts
        .into_iter()
        .map(|text| {
            let result = ctx.classifier.classify(&text);
            ClassifiedText { text, result }
        })
        .collect();

    let status = if results.iter().all(|r| r.result.accepted) {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };

    Ok(CommandResult {
        summary: CommandSummary::Classify(results),
        status,
    })
}
