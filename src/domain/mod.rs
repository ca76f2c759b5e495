//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Check trait, the built-in checks, filtering and the collect-all runner
//! - Hooks and the fail-fast runner
//! - The registry tying both together
//! - External command execution
//! - Logger with rotation

pub mod checks;
mod error;
pub mod hooks;
pub mod logger;
mod process;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use checks::CheckResult;
pub use error::{CheckError, CommandError, ExitCode, ReleaseError};

// Allow unused for potential library API usage
#[allow(unused_imports)]
pub use checks::Check;
#[allow(unused_imports)]
pub use hooks::Hook;
pub use process::{CommandRunner, CommandSpec, SystemRunner};
pub use registry::Registry;
