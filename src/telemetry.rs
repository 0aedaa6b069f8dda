//! Tracing subscriber bootstrap.
//!
//! The library only emits `tracing` events; hosts decide whether to install
//! a subscriber. [`init_tracing`] installs the default formatter.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised")]
    AlreadyInitialised,
}

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_level` is used and
/// does not parse as a filter directive.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level).map_err(|err| TelemetryError::InvalidFilter {
        directive: default_level.to_owned(),
        reason: err.to_string(),
    })
}

/// Installs a formatting subscriber for the process.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for an unparsable level and
/// [`TelemetryError::AlreadyInitialised`] when another subscriber is active.
pub fn init_tracing(default_level: &str) -> Result<(), TelemetryError> {
    let filter = env_filter(default_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialised)?;
    tracing::debug!(level = default_level, "tracing initialised");
    Ok(())
}
