//! release-prep: release readiness helper
//!
//! Runs named checks (validations that must pass, such as being on the release
//! branch) and named hooks (preparatory commands such as downloading
//! dependencies) before a release is cut.

mod cli;
mod config;
mod domain;
mod service;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use config::{Config, ConfigService};
use domain::{CommandRunner, ExitCode, Registry, ReleaseError, SystemRunner};
use service::ReleaseService;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // A broken config file must not block regenerating it
    let config = if cli.command.needs_config() {
        match ConfigService::load(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {:#}", e);
                return ExitCode::ConfigError.into();
            }
        }
    } else {
        Config::default()
    };

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        if let Err(e) = domain::logger::init(&config.log_path) {
            eprintln!("error: {:#}", e);
            return ExitCode::InternalError.into();
        }
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("error: {:#}", e);
            match e.downcast_ref::<ReleaseError>() {
                Some(err) => ExitCode::from(err).into(),
                None => ExitCode::InternalError.into(),
            }
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let service = ReleaseService::new(Registry::builtin(runner.clone()), runner);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    // Execute command
    match &cli.command {
        Commands::Check => {
            let disabled = config.disabled_with(&cli.disable_checks);
            service.check(&disabled, &mut stdout)?;
        }
        Commands::Hooks => {
            service.hooks(&mut stdout)?;
        }
        Commands::List => {
            service.list(&mut stdout)?;
        }
        Commands::Init { path } => {
            let config_path = match path {
                Some(p) => {
                    ConfigService::generate_at(p)?;
                    p.clone()
                }
                None => {
                    ConfigService::generate_default()?;
                    ConfigService::default_path()
                }
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Version => {
            writeln!(stdout, "release-prep {}", env!("CARGO_PKG_VERSION"))
                .context("Failed to write version")?;
        }
    }

    stdout.flush().context("Failed to flush output")?;

    Ok(())
}
