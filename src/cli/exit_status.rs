use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, including dry runs that found work to do
/// - `Failure` (1): `classify` rejected at least one of its inputs
/// - `Error` (2): Command failed (config error, malformed base locale, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
