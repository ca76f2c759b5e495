//! Selecting and running checks.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{Check, CheckResult};
use crate::domain::ReleaseError;

/// Return the checks in `all` without the ones named in `disabled`.
///
/// Registry order is kept. The first name in `disabled` that matches no
/// check is reported as an error and nothing is returned.
pub fn filter_checks<'a>(
    all: &'a [Box<dyn Check>],
    disabled: &[String],
) -> Result<Vec<&'a dyn Check>, ReleaseError> {
    let known: HashSet<&str> = all.iter().map(|check| check.name()).collect();

    let mut rejected = HashSet::new();
    for name in disabled {
        if !known.contains(name.as_str()) {
            return Err(ReleaseError::InvalidCheckName { name: name.clone() });
        }
        rejected.insert(name.as_str());
    }

    let selected: Vec<&dyn Check> = all
        .iter()
        .map(|check| check.as_ref())
        .filter(|check| !rejected.contains(check.name()))
        .collect();

    debug!(
        "Selected {} of {} checks (disabled: {:?})",
        selected.len(),
        all.len(),
        disabled
    );

    Ok(selected)
}

/// Run every check in order and collect each outcome.
///
/// A failing check never stops the run.
pub fn run_checks<'a>(checks: &[&'a dyn Check]) -> Vec<CheckResult<'a>> {
    checks
        .iter()
        .map(|&check| {
            debug!("Running check: {}", check.name());
            let result = check.run();
            match &result {
                Ok(()) => info!("Check passed: {}", check.name()),
                Err(e) => info!("Check failed: {}: {}", check.name(), e),
            }
            CheckResult { check, result }
        })
        .collect()
}
