//! Release preparation service.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::checks::{filter_checks, run_checks};
use crate::domain::hooks::run_hooks;
use crate::domain::{CommandRunner, Registry, ReleaseError};
use crate::service::report::report_checks;

/// Service running the registered checks and hooks.
pub struct ReleaseService {
    registry: Registry,
    runner: Arc<dyn CommandRunner>,
}

impl ReleaseService {
    /// Create a new ReleaseService.
    pub fn new(registry: Registry, runner: Arc<dyn CommandRunner>) -> Self {
        Self { registry, runner }
    }

    /// Run all checks except `disabled` and print one line per check.
    ///
    /// An unknown disabled name aborts before any check runs.
    pub fn check(&self, disabled: &[String], out: &mut dyn Write) -> Result<(), ReleaseError> {
        let checks = filter_checks(self.registry.checks(), disabled)?;
        info!("Running {} checks", checks.len());

        let results = run_checks(&checks);
        report_checks(&results, out)
    }

    /// Run every hook in order, stopping at the first failure.
    pub fn hooks(&self, out: &mut dyn Write) -> Result<(), ReleaseError> {
        info!("Running {} hooks", self.registry.hooks().len());
        run_hooks(self.registry.hooks(), self.runner.as_ref(), out)?;
        debug!("All hooks finished");
        Ok(())
    }

    /// Print every registered check and hook.
    pub fn list(&self, out: &mut dyn Write) -> Result<(), ReleaseError> {
        for check in self.registry.checks() {
            writeln!(out, "check\t{}\t{}", check.name(), check.description())?;
        }
        for hook in self.registry.hooks() {
            writeln!(out, "hook\t{}\t{}", hook.name, hook.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::{FakeRunner, StaticCheck};
    use crate::domain::{Check, CommandSpec, Hook};

    fn service(
        checks: Vec<Box<dyn Check>>,
        hooks: Vec<Hook>,
        runner: Arc<FakeRunner>,
    ) -> ReleaseService {
        ReleaseService::new(Registry::new(checks, hooks), runner)
    }

    fn two_checks() -> Vec<Box<dyn Check>> {
        vec![
            Box::new(StaticCheck::passing("CheckA")),
            Box::new(StaticCheck::failing("CheckB", "main")),
        ]
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_reports_every_check_then_fails() {
        let svc = service(two_checks(), vec![], Arc::new(FakeRunner::new()));
        let mut out: Vec<u8> = Vec::new();

        let err = svc.check(&[], &mut out).unwrap_err();

        assert!(matches!(err, ReleaseError::CheckFailed));
        let printed = output(out);
        assert_eq!(printed.lines().count(), 2);
        assert!(printed.lines().nth(1).unwrap().starts_with("✗  CheckB"));
        assert!(printed.ends_with("current branch is \"main\" instead of master\n"));
    }

    #[test]
    fn test_check_with_failing_check_disabled_succeeds() {
        let svc = service(two_checks(), vec![], Arc::new(FakeRunner::new()));
        let mut out: Vec<u8> = Vec::new();

        svc.check(&["CheckB".to_string()], &mut out).unwrap();

        assert_eq!(output(out), "✓  CheckA\tstatic test check\t\n");
    }

    #[test]
    fn test_check_unknown_name_runs_nothing() {
        let svc = service(two_checks(), vec![], Arc::new(FakeRunner::new()));
        let mut out: Vec<u8> = Vec::new();

        let err = svc.check(&["DoesNotExist".to_string()], &mut out).unwrap_err();

        assert!(matches!(&err, ReleaseError::InvalidCheckName { name } if name == "DoesNotExist"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_everything_disabled_succeeds() {
        let svc = service(two_checks(), vec![], Arc::new(FakeRunner::new()));
        let mut out: Vec<u8> = Vec::new();

        let disabled = vec!["CheckA".to_string(), "CheckB".to_string()];
        svc.check(&disabled, &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_hooks_fail_fast() {
        let runner = Arc::new(FakeRunner::failing_on("hook-y"));
        let hooks = vec![
            Hook::new("HookX", "x", CommandSpec::new("hook-x", Vec::<String>::new())),
            Hook::new("HookY", "y", CommandSpec::new("hook-y", Vec::<String>::new())),
            Hook::new("HookZ", "z", CommandSpec::new("hook-z", Vec::<String>::new())),
        ];
        let svc = service(vec![], hooks, runner.clone());
        let mut out: Vec<u8> = Vec::new();

        let err = svc.hooks(&mut out).unwrap_err();

        assert!(err.to_string().contains("HookY"));
        assert_eq!(runner.invoked(), vec!["hook-x", "hook-y"]);
        assert_eq!(output(out), "run HookX\nrun HookY\n");
    }

    #[test]
    fn test_list_prints_checks_then_hooks() {
        let runner = Arc::new(FakeRunner::new());
        let svc = ReleaseService::new(Registry::builtin(runner.clone()), runner.clone());
        let mut out: Vec<u8> = Vec::new();

        svc.list(&mut out).unwrap();

        let printed = output(out);
        let kinds: Vec<_> = printed
            .lines()
            .map(|l| l.split('\t').next().unwrap())
            .collect();
        assert_eq!(kinds, vec!["check", "hook", "hook"]);
        assert!(printed.contains("check\tcheck-branch-master\t"));
        assert!(runner.invoked().is_empty());
    }
}
