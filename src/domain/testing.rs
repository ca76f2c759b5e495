//! Test doubles for checks and command execution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{Check, CheckError, CommandError, CommandRunner, CommandSpec};

/// Runner that records invocations and never spawns a process.
#[derive(Default)]
pub struct FakeRunner {
    output: String,
    failing_program: Option<String>,
    invoked: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command succeeds and prints `output`.
    pub fn with_output(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ..Self::default()
        }
    }

    /// Commands running `program` exit with status 1, others succeed.
    pub fn failing_on(program: &str) -> Self {
        Self {
            failing_program: Some(program.to_string()),
            ..Self::default()
        }
    }

    /// Command lines invoked so far, in order.
    pub fn invoked(&self) -> Vec<String> {
        self.invoked.lock().unwrap().clone()
    }

    fn record(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        self.invoked.lock().unwrap().push(spec.to_string());
        if self.failing_program.as_deref() == Some(spec.program.as_str()) {
            return Err(CommandError::Status {
                command: spec.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl CommandRunner for FakeRunner {
    fn output(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        self.record(spec)?;
        Ok(self.output.clone())
    }

    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        self.record(spec)
    }
}

/// Check with a fixed outcome that counts how often it ran.
///
/// A failing instance reports being on the given branch.
pub struct StaticCheck {
    name: String,
    branch: Option<String>,
    runs: AtomicUsize,
}

impl StaticCheck {
    pub fn passing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            branch: None,
            runs: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str, branch: &str) -> Self {
        Self {
            name: name.to_string(),
            branch: Some(branch.to_string()),
            runs: AtomicUsize::new(0),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl Check for StaticCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "static test check"
    }

    fn run(&self) -> Result<(), CheckError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match &self.branch {
            Some(branch) => Err(CheckError::WrongBranch {
                current: branch.clone(),
            }),
            None => Ok(()),
        }
    }
}
