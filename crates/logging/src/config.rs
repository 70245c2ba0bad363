//! Formatter configuration: default level, label overrides, and the formatting function.
//!
//! A configuration file is RON:
//!
//! ```ron
//! (
//!     minimum_level: "info", // or a raw value such as 2
//!     labels: (warning: "WARN!", error: "FAIL!"),
//! )
//! ```
//!
//! Every field is optional. Labels not named keep their defaults.

use std::{fs, path::Path};

use linefmt::{EntryFormatter, FormatterFn, LabelMap, Level};
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Minimum severity forwarded to the formatter when nothing else is configured.
pub const DEFAULT_LEVEL: Level = Level::Trace;

/// Deserializable formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Lowest severity that should reach the formatter.
    pub minimum_level: Level,
    /// Labels used inside the brackets.
    pub labels: LabelMap,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            minimum_level: DEFAULT_LEVEL,
            labels: LabelMap::default(),
        }
    }
}

/// Parse a configuration from RON text. `path` is only used for error messages.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<LoggingConfig> {
    let cfg: LoggingConfig = ron::from_str(text).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })?;
    cfg.labels.validate().map_err(|source| Error::Validation {
        path: path.map(Path::to_path_buf),
        source,
    })?;
    Ok(cfg)
}

/// Read and parse a configuration file.
pub fn load_from_path(path: &Path) -> Result<LoggingConfig> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let cfg = load_from_str(&text, Some(path))?;
    debug!(path = %path.display(), minimum_level = %cfg.minimum_level, "loaded log config");
    Ok(cfg)
}

/// Runtime options handed to the tracing adapter.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Lowest severity that should reach the formatter.
    pub minimum_level: Level,
    /// Label map plus formatting function.
    pub formatter: EntryFormatter,
}

impl Default for LogOptions {
    fn default() -> Self {
        LoggingConfig::default().into()
    }
}

impl From<LoggingConfig> for LogOptions {
    fn from(cfg: LoggingConfig) -> Self {
        Self {
            minimum_level: cfg.minimum_level,
            formatter: EntryFormatter::new(cfg.labels),
        }
    }
}

impl LogOptions {
    /// Replace the formatting function, keeping the labels.
    #[must_use]
    pub fn with_formatter_fn(mut self, format_fn: FormatterFn) -> Self {
        self.formatter = self.formatter.with_function(format_fn);
        self
    }

    /// Override the minimum level.
    #[must_use]
    pub fn with_minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }
}
