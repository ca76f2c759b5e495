//! Error types for release-prep.

use std::io;

use thiserror::Error;

/// Failure of an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started at all
    #[error("unable to run `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but did not exit successfully
    #[error("`{command}` {}", describe_exit(.code))]
    Status { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Outcome of a single check that did not pass.
///
/// These are collected as data and printed next to the check; they never
/// abort a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The current branch could not be queried
    #[error("unable to determine current branch: {0}")]
    BranchQuery(CommandError),

    /// The working copy is on another branch than the release branch
    #[error("current branch is {current:?} instead of master")]
    WrongBranch { current: String },
}

/// Main error type for release-prep.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// A disabled check name matches no registered check
    #[error("invalid check name {name:?}")]
    InvalidCheckName { name: String },

    /// One or more checks failed; details were already printed
    #[error("check failed")]
    CheckFailed,

    /// A hook's command failed, later hooks were not run
    #[error("hook {name} failed: {cause}")]
    HookFailed { name: String, cause: CommandError },

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Everything passed
    Success = 0,
    /// One or more checks failed
    CheckFailed = 1,
    /// Configuration, argument or check name error
    ConfigError = 2,
    /// A hook failed
    HookFailed = 3,
    /// Anything else
    InternalError = 4,
}

impl From<&ReleaseError> for ExitCode {
    fn from(err: &ReleaseError) -> Self {
        match err {
            ReleaseError::InvalidCheckName { .. } => ExitCode::ConfigError,
            ReleaseError::CheckFailed => ExitCode::CheckFailed,
            ReleaseError::HookFailed { .. } => ExitCode::HookFailed,
            ReleaseError::Io(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
