#![warn(missing_docs)]

//! Entry point for the `logline` binary.

mod cli;
mod error;

use std::{error::Error as StdError, io, process, time::Duration};

use clap::Parser;
use linefmt::{Level, PreparedLogEntry};
use logging::LogOptions;
use tracing::{debug, error, info, info_span, trace, warn};

use crate::{
    cli::{Cli, Commands, DemoArgs, RenderArgs},
    error::{Error, Result},
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, load configuration, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    let options = log.options()?;
    match command {
        Commands::Render(args) => render(&args, &options),
        Commands::Demo(args) => {
            let spec = log.spec(options.minimum_level);
            logging::init(options, &spec)?;
            demo(&args);
            Ok(())
        }
    }
}

/// Build the entry described by `args`.
fn entry_from_args(args: &RenderArgs) -> Result<PreparedLogEntry> {
    let elapsed = Duration::try_from_secs_f64(args.elapsed)
        .map_err(|_| Error::InvalidElapsed(args.elapsed))?;
    let mut entry = PreparedLogEntry::new(elapsed, Level::from_raw(args.level))
        .with_scopes(args.scopes.clone());
    entry.category = args.category.clone();
    entry.message = args.message.clone();
    entry.exception = args.exception.clone();
    Ok(entry)
}

/// Render one entry straight to stdout, bypassing tracing.
fn render(args: &RenderArgs, options: &LogOptions) -> Result<()> {
    let entry = entry_from_args(args)?;
    let stdout = io::stdout();
    options.formatter.write_to(&entry, &mut stdout.lock())?;
    Ok(())
}

/// Emit nested spans and one event per tracing level.
fn demo(args: &DemoArgs) {
    info!(requests = args.requests, "demo starting");
    for id in 0..args.requests {
        let _request = info_span!("request", id).entered();
        debug!(target: "logline::http", path = "/status", "accepted");
        let _handler = info_span!("handler").entered();
        trace!(target: "logline::http", "dispatching");
        if id % 2 == 1 {
            warn!(target: "logline::http", elapsed_ms = 950, "slow response");
        } else {
            info!(target: "logline::http", "ok");
        }
    }
    let err = io::Error::new(io::ErrorKind::TimedOut, "upstream timed out");
    error!(error = &err as &(dyn StdError + 'static), "demo finished with an error");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render args with everything unset.
    fn args() -> RenderArgs {
        RenderArgs {
            level: 2,
            elapsed: 0.0,
            category: None,
            scopes: Vec::new(),
            exception: None,
            message: None,
        }
    }

    #[test]
    fn builds_entry_from_flags() {
        let a = RenderArgs {
            level: 5,
            elapsed: 12.3,
            category: Some("App.Startup".into()),
            scopes: vec!["Request".into(), "Handler".into()],
            message: Some("started".into()),
            ..args()
        };
        let entry = entry_from_args(&a).unwrap();
        assert_eq!(entry.level, Level::Critical);
        assert_eq!(entry.elapsed.as_millis(), 12_300);
        let out = LogOptions::default().formatter.render(&entry).unwrap();
        assert_eq!(out, "012.300s [crit ] App.Startup: (Request > Handler) started\n");
    }

    #[test]
    fn unrecognized_level_renders_fallback() {
        let a = RenderArgs {
            level: 99,
            ..args()
        };
        let entry = entry_from_args(&a).unwrap();
        let out = LogOptions::default().formatter.render(&entry).unwrap();
        assert_eq!(out, "000.000s [???? ]:\n");
    }

    #[test]
    fn negative_elapsed_is_rejected() {
        let a = RenderArgs {
            elapsed: -1.0,
            ..args()
        };
        assert!(matches!(entry_from_args(&a), Err(Error::InvalidElapsed(_))));
    }
}
