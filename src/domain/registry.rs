//! Registry of all known checks and hooks.

use std::sync::Arc;

use super::checks::{BranchMasterCheck, Check};
use super::hooks::{builtin_hooks, Hook};
use super::CommandRunner;

/// Ordered, read-only collection of checks and hooks.
///
/// Built once at startup; the order of each list is the execution order.
pub struct Registry {
    checks: Vec<Box<dyn Check>>,
    hooks: Vec<Hook>,
}

impl Registry {
    /// Create a registry from explicit lists.
    pub fn new(checks: Vec<Box<dyn Check>>, hooks: Vec<Hook>) -> Self {
        Self { checks, hooks }
    }

    /// Create the registry of built-in checks and hooks.
    pub fn builtin(runner: Arc<dyn CommandRunner>) -> Self {
        let checks: Vec<Box<dyn Check>> = vec![Box::new(BranchMasterCheck::new(runner))];
        Self::new(checks, builtin_hooks())
    }

    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }
}
