//! Release hooks: preparatory commands run before releasing.

use std::io::Write;

use tracing::{error, info};

use super::{CommandRunner, CommandSpec, ReleaseError};

/// A command which is run before releasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    pub name: String,
    pub description: String,
    pub command: CommandSpec,
}

impl Hook {
    /// Create a new Hook.
    pub fn new(name: &str, description: &str, command: CommandSpec) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            command,
        }
    }
}

/// The built-in hooks, in execution order.
///
/// Modules must be downloaded before code generation runs.
pub fn builtin_hooks() -> Vec<Hook> {
    vec![
        Hook::new(
            "run-go-mod-download",
            "run 'go mod download' to make sure all Go modules are accessible",
            CommandSpec::new("go", ["mod", "download"]),
        ),
        Hook::new(
            "run-go-generate",
            "run 'go generate ./...' to make sure all generated code is up to date",
            CommandSpec::new("go", ["generate", "./..."]),
        ),
    ]
}

/// Run hooks in order, stopping at the first failure.
///
/// A progress line is written to `out` before each hook starts.
pub fn run_hooks(
    hooks: &[Hook],
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<(), ReleaseError> {
    for hook in hooks {
        writeln!(out, "run {}", hook.name)?;
        out.flush()?;

        info!("Running hook: {} ({})", hook.name, hook.command);

        if let Err(cause) = runner.run(&hook.command) {
            error!("Hook failed: {}: {}", hook.name, cause);
            return Err(ReleaseError::HookFailed {
                name: hook.name.clone(),
                cause,
            });
        }
    }

    Ok(())
}
