use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and found translatable text
/// - `Failure` (1): Command completed but found nothing to translate
/// - `Error` (2): Command failed (unsupported input, I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found nothing to translate.
    Failure,
    /// Command failed.
    Error,
}

impl ExitStatus {
    /// `Success` when at least one string was found, `Failure` otherwise.
    pub fn for_found(found: usize) -> Self {
        if found > 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
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
