//! External command execution.

use std::fmt;
use std::process::Command;

use tracing::debug;

use super::CommandError;

/// A program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new CommandSpec.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Capability to run external programs.
///
/// Checks and hooks only talk to the outside world through this trait, so
/// tests can substitute a fake that never spawns a process.
pub trait CommandRunner: Send + Sync {
    /// Run the command and return its captured standard output.
    fn output(&self, spec: &CommandSpec) -> Result<String, CommandError>;

    /// Run the command with inherited stdio and wait for it to exit.
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        cmd
    }

    fn launch_error(spec: &CommandSpec, source: std::io::Error) -> CommandError {
        CommandError::Launch {
            command: spec.to_string(),
            source,
        }
    }
}

impl CommandRunner for SystemRunner {
    fn output(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        debug!("Capturing output of: {}", spec);

        let output = Self::command(spec)
            .output()
            .map_err(|e| Self::launch_error(spec, e))?;

        if !output.status.success() {
            debug!(
                "Command failed: {} stderr={}",
                spec,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
            return Err(CommandError::Status {
                command: spec.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        debug!("Executing: {}", spec);

        let status = Self::command(spec)
            .status()
            .map_err(|e| Self::launch_error(spec, e))?;

        debug!("Command finished: {} status={}", spec, status);

        if !status.success() {
            return Err(CommandError::Status {
                command: spec.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display_joins_args() {
        let spec = CommandSpec::new("go", ["generate", "./..."]);
        assert_eq!(spec.to_string(), "go generate ./...");
    }

    #[test]
    fn test_command_spec_display_without_args() {
        let spec = CommandSpec::new("true", Vec::<String>::new());
        assert_eq!(spec.to_string(), "true");
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let spec = CommandSpec::new("release-prep-no-such-program", ["--version"]);
        let err = SystemRunner.run(&spec).unwrap_err();
        assert!(matches!(err, CommandError::Launch { .. }));
        assert!(err.to_string().contains("release-prep-no-such-program --version"));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_captures_stdout() {
        let spec = CommandSpec::new("echo", ["master"]);
        let output = SystemRunner.output(&spec).unwrap();
        assert_eq!(output, "master\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_status_error() {
        let spec = CommandSpec::new("false", Vec::<String>::new());
        let err = SystemRunner.run(&spec).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Status { code: Some(1), .. }
        ));
    }
}
