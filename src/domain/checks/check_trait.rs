//! Check trait definition.

use crate::domain::CheckError;

/// Trait for release checks.
///
/// A check is a named validation without side effects on the project.
pub trait Check: Send + Sync {
    /// Unique name, used on the command line to disable the check.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Run the validation.
    fn run(&self) -> Result<(), CheckError>;
}

/// A check bundled with the outcome of running it.
pub struct CheckResult<'a> {
    pub check: &'a dyn Check,
    pub result: Result<(), CheckError>,
}

impl CheckResult<'_> {
    /// Whether the check did not pass.
    pub fn failed(&self) -> bool {
        self.result.is_err()
    }
}
