use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Catalog listing written
/// - `Error` (2): Run aborted (unreadable source or catalog, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Catalog listing written.
    Success,
    /// Run aborted by an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
