//! Command-line interface definitions for logline.

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `logline` binary.
#[derive(Parser, Debug)]
#[command(name = "logline", about = "Render log entries as single lines", version)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one entry described on the command line to stdout.
    Render(RenderArgs),
    /// Emit a scoped sample of events at every level through tracing.
    Demo(DemoArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Raw severity value (0=trace .. 5=critical, 6=none; others are unrecognized).
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub level: i32,

    /// Elapsed seconds since the reference point.
    #[arg(long, default_value_t = 0.0)]
    pub elapsed: f64,

    /// Log source.
    #[arg(long)]
    pub category: Option<String>,

    /// Active scope, outermost first. Repeat for nesting.
    #[arg(long = "scope", value_name = "SCOPE")]
    pub scopes: Vec<String>,

    /// Exception text printed after the entry.
    #[arg(long)]
    pub exception: Option<String>,

    /// Message text.
    pub message: Option<String>,
}

/// Arguments for the `demo` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Number of request spans to emit.
    #[arg(long, default_value_t = 2)]
    pub requests: u32,
}
