use crate::cli::ExitStatus;
use crate::core::{
    classify::ClassificationResult,
    pipeline::{ExtractReport, SyncReport},
};

#[derive(Debug)]
pub struct ClassifiedText {
    pub text: String,
    pub result: ClassificationResult,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: String,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractReport),
    Sync(SyncReport),
    Classify(Vec<ClassifiedText>),
    Init(InitSummary),
}

/// Result of running a harvest command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }
}
