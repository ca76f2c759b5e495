//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release readiness checks and preparatory hooks
#[derive(Parser)]
#[command(
    name = "release-prep",
    version,
    about = "Release readiness checks and preparatory hooks",
    long_about = "Runs named checks that must pass before a release is cut, \
                  and named hooks that prepare the working copy for it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Checks to skip (comma-separated, repeatable)
    #[arg(long, global = true, value_delimiter = ',', value_name = "NAME")]
    pub disable_checks: Vec<String>,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run checks and print the result of each
    Check,
    /// Run all hooks in order, stopping at the first failure
    Hooks,
    /// List all registered checks and hooks
    List,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Display version information
    Version,
}

impl Commands {
    /// Whether the command reads the configuration file.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Init { .. } | Commands::Version)
    }
}
