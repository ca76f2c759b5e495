//! File logging for release-prep runs.
//!
//! Each run appends to `<log_path>/release-prep.<date>.log`. The level
//! defaults to `debug` and can be overridden with `RELEASE_PREP_LOG`
//! using `EnvFilter` directives.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of every log file name.
const LOG_FILE_PREFIX: &str = "release-prep";

const LOG_FILE_SUFFIX: &str = "log";

/// Environment variable holding filter directives.
const LOG_ENV: &str = "RELEASE_PREP_LOG";

/// How long log files are kept.
const RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

type Timer = OffsetTime<&'static [BorrowedFormatItem<'static>]>;

/// Initialize file logging in `log_path`.
pub fn init(log_path: &Path) -> Result<()> {
    fs::create_dir_all(log_path)
        .with_context(|| format!("Failed to create log directory: {}", log_path.display()))?;

    cleanup_old_logs(log_path, SystemTime::now())?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_path)
        .with_context(|| format!("Failed to open log file in {}", log_path.display()))?;

    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(local_timer());

    tracing_subscriber::registry()
        .with(filter())
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Timestamps in local time, UTC when the offset is unknown.
fn local_timer() -> Timer {
    let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    OffsetTime::new(
        offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
}

/// Remove release-prep log files last modified before `now - RETENTION`.
pub fn cleanup_old_logs(log_path: &Path, now: SystemTime) -> Result<()> {
    let Some(cutoff) = now.checked_sub(RETENTION) else {
        return Ok(());
    };

    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_ours {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if let Ok(modified) = modified {
            if modified < cutoff {
                let _ = fs::remove_file(&path);
            }
        }
    }

    Ok(())
}
