//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! The filter comes from `EVD_LOG` when set, else from the config's
//! `log_level`.

use std::env::{self, VarError};
use std::io::stderr;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, paths};

/// Env var holding a filter directive that overrides the config.
pub const LOG_ENV: &str = "EVD_LOG";

/// Keeps the file writer flushing. Drop it only at process exit.
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Builds the filter: `EVD_LOG` wins, then `fallback`.
pub fn build_filter(fallback: &str) -> Result<EnvFilter> {
    filter_from(env::var(LOG_ENV), fallback)
}

/// `fallback` applies only when the variable is unset. A set but unusable
/// value is an error, same as a bad `log_level`.
fn filter_from(env_value: Result<String, VarError>, fallback: &str) -> Result<EnvFilter> {
    match env_value {
        Ok(directive) => EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid {LOG_ENV} directive '{directive}'")),
        Err(VarError::NotPresent) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid log_level directive '{fallback}'")),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(err).with_context(|| format!("Invalid {LOG_ENV} value"))
        }
    }
}

/// Installs the global subscriber.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(config: &Config) -> Result<LoggingGuard> {
    let filter = build_filter(&config.log_level)?;

    let (file_layer, guard) = if config.log_file {
        let appender = tracing_appender::rolling::daily(paths::logs_dir(), "evd.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(stderr))
        .with(file_layer)
        .try_init();

    if installed.is_err() {
        // Already installed by an earlier call (or a test harness).
        return Ok(LoggingGuard::default());
    }

    Ok(LoggingGuard { _file: guard })
}
