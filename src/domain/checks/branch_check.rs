//! Current branch check implementation.

use std::sync::Arc;

use tracing::debug;

use super::Check;
use crate::domain::{CheckError, CommandRunner, CommandSpec};

/// Branch releases are cut from.
pub const RELEASE_BRANCH: &str = "master";

/// Check that the working copy is on the release branch.
pub struct BranchMasterCheck {
    runner: Arc<dyn CommandRunner>,
}

impl BranchMasterCheck {
    pub const NAME: &'static str = "check-branch-master";

    /// Create a new BranchMasterCheck querying git through `runner`.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn query() -> CommandSpec {
        CommandSpec::new("git", ["branch", "--show-current"])
    }
}

impl Check for BranchMasterCheck {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "test if the current branch is master"
    }

    fn run(&self) -> Result<(), CheckError> {
        let output = self
            .runner
            .output(&Self::query())
            .map_err(CheckError::BranchQuery)?;

        let branch = output.trim_end_matches(['\n', '\r']);
        debug!("Current branch: {:?}", branch);

        if branch != RELEASE_BRANCH {
            return Err(CheckError::WrongBranch {
                current: branch.to_string(),
            });
        }

        Ok(())
    }
}
