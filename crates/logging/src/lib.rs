#![warn(missing_docs)]

//! Configuration, CLI arguments, and tracing integration for the logline formatter.
//!
//! This crate wires [`linefmt`] into a process:
//! - [`config`]: default level, RON label overrides, and runtime [`LogOptions`]
//! - [`format`]: a `tracing_subscriber` event formatter built on [`linefmt`]
//! - CLI argument parsing and filter directives for log level configuration

use std::{env, io, path::PathBuf};

use clap::Args;
use linefmt::Level;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, format::DefaultFields},
    prelude::*,
    registry,
    registry::LookupSpan,
};

pub mod config;
mod error;
pub mod format;

pub use config::{DEFAULT_LEVEL, LogOptions, LoggingConfig, load_from_path, load_from_str};
pub use error::{Error, Result};
pub use format::{EntryFormat, level_filter, level_from_tracing};

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (trace|debug|info|warn|error|critical|none|0-6)
    #[arg(long)]
    pub log_level: Option<Level>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "logline=trace,logging=debug"
    #[arg(long)]
    pub log_filter: Option<String>,

    /// RON file overriding the minimum level and level labels
    #[arg(long, value_name = "PATH")]
    pub labels: Option<PathBuf>,
}

impl LogArgs {
    /// Filter spec for these flags, falling back to `default` when none apply.
    pub fn spec(&self, default: Level) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level,
            self.log_filter.as_deref(),
            default,
        )
    }

    /// Load the labels file if one was given, otherwise the default config.
    pub fn config(&self) -> Result<LoggingConfig> {
        match &self.labels {
            Some(path) => load_from_path(path),
            None => Ok(LoggingConfig::default()),
        }
    }

    /// Level requested by `--trace`, `--debug`, or `--log-level`, if any.
    pub fn level_override(&self) -> Option<Level> {
        if self.trace {
            Some(Level::Trace)
        } else if self.debug {
            Some(Level::Debug)
        } else {
            self.log_level
        }
    }

    /// Runtime options from the config, with the minimum level replaced by any
    /// level flag.
    pub fn options(&self) -> Result<LogOptions> {
        let options = LogOptions::from(self.config()?);
        Ok(match self.level_override() {
            Some(level) => options.with_minimum_level(level),
            None => options,
        })
    }
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &["logline", "logging", "linefmt"]
}

/// Filter directive name for `level`.
///
/// `Critical` shares `error`; `None` and unrecognized levels map to `off`.
pub fn directive_for(level: Level) -> &'static str {
    match level {
        Level::Trace => "trace",
        Level::Debug => "debug",
        Level::Information => "info",
        Level::Warning => "warn",
        Level::Error | Level::Critical => "error",
        Level::None | Level::Unrecognized(_) => "off",
    }
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: Level) -> String {
    let lvl = directive_for(level);
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - crate-scoped `default`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<Level>,
    log_filter: Option<&str>,
    default: Level,
) -> String {
    let rust_log = env::var("RUST_LOG").ok();
    compute_spec_with_env(
        trace,
        debug,
        log_level,
        log_filter,
        rust_log.as_deref(),
        default,
    )
}

/// [`compute_spec`] with the `RUST_LOG` value passed in.
pub fn compute_spec_with_env(
    trace: bool,
    debug: bool,
    log_level: Option<Level>,
    log_filter: Option<&str>,
    rust_log: Option<&str>,
    default: Level,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for(Level::Trace);
    }
    if debug {
        return level_spec_for(Level::Debug);
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    match rust_log {
        Some(spec) => spec.to_string(),
        None => level_spec_for(default),
    }
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

/// The fmt layer that renders events through `format` into `writer`.
///
/// Color is off: span fields end up inside rendered scopes verbatim.
pub fn layer<S, W>(format: EntryFormat, writer: W) -> fmt::Layer<S, DefaultFields, EntryFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .event_format(format)
        .with_ansi(false)
        .with_writer(writer)
}

/// Build a subscriber that renders events with `options` into `writer`.
///
/// `spec` selects targets; `options.minimum_level` caps severity on top of it.
pub fn subscriber<W>(
    options: LogOptions,
    spec: &str,
    writer: W,
) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let LogOptions {
        minimum_level,
        formatter,
    } = options;
    registry()
        .with(env_filter_from_spec(spec))
        .with(level_filter(minimum_level))
        .with(layer(EntryFormat::new(formatter), writer))
}

/// Install a global subscriber that renders events with `options` to stderr.
pub fn init(options: LogOptions, spec: &str) -> Result<()> {
    subscriber(options, spec, io::stderr).try_init()?;
    Ok(())
}
