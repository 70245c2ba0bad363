//! Error types for logging configuration and subscriber installation.

use std::{path::PathBuf, result};

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Convenient result type for logging setup.
pub type Result<T> = result::Result<T, Error>;

/// Errors produced while loading configuration or installing the subscriber.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Read error at {}: {message}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    /// The configuration text is not valid RON for [`crate::LoggingConfig`].
    #[error("Config parse error{}: {message}", path_suffix(.path.as_ref()))]
    Parse {
        /// Optional path the text was loaded from.
        path: Option<PathBuf>,
        /// Parser message, including the location.
        message: String,
    },
    /// The configuration parsed but holds an unusable label map.
    #[error("Config validation error{}: {source}", path_suffix(.path.as_ref()))]
    Validation {
        /// Optional path the text was loaded from.
        path: Option<PathBuf>,
        /// The label problem.
        source: linefmt::Error,
    },
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Render ` at <path>` when a path is known.
fn path_suffix(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" at {}", p.display())).unwrap_or_default()
}
