//! Human-readable check output.

use std::io::Write;

use crate::domain::{CheckResult, ReleaseError};

/// Marker printed in front of a passed check.
pub const PASS_MARKER: &str = "✓";

/// Marker printed in front of a failed check.
pub const FAIL_MARKER: &str = "✗";

/// Print one line per check result, then fold them into a single outcome.
///
/// Line format is `<marker>  <name>\t<description>\t<message>` where the
/// message is empty for passed checks. Returns [`ReleaseError::CheckFailed`]
/// when any check failed.
pub fn report_checks(
    results: &[CheckResult<'_>],
    out: &mut dyn Write,
) -> Result<(), ReleaseError> {
    for result in results {
        let marker = if result.failed() {
            FAIL_MARKER
        } else {
            PASS_MARKER
        };
        let message = result
            .result
            .as_ref()
            .err()
            .map(ToString::to_string)
            .unwrap_or_default();

        writeln!(
            out,
            "{}  {}\t{}\t{}",
            marker,
            result.check.name(),
            result.check.description(),
            message
        )?;
    }

    if results.iter().any(|r| r.failed()) {
        return Err(ReleaseError::CheckFailed);
    }

    Ok(())
}
