//! Bridge `tracing` events into [`PreparedLogEntry`] values and render them.
//!
//! [`EntryFormat`] plugs into `tracing_subscriber::fmt` as the event formatter.
//! For each event it builds an entry:
//! - elapsed: time since the formatter was created
//! - level: mapped from the tracing level
//! - category: the event target
//! - scopes: the active span chain, root first, as `name` or `name{fields}`
//! - message: the `message` field followed by any other fields as `key=value`
//! - exception: the `exception` or `error` field, when recorded

use std::{
    error::Error as StdError,
    fmt::{self, Debug, Write},
    time::Instant,
};

use linefmt::{EntryFormatter, Level, PreparedLogEntry, render_error_chain};
use tracing::{
    Event, Level as TracingLevel, Subscriber,
    field::{Field, Visit},
    level_filters::LevelFilter,
};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields, format::Writer},
    registry::LookupSpan,
};

/// Field names whose value becomes the exception block.
const EXCEPTION_FIELDS: [&str; 2] = ["exception", "error"];

/// Map a tracing level onto the formatter's severity scale.
pub fn level_from_tracing(level: &TracingLevel) -> Level {
    match *level {
        TracingLevel::TRACE => Level::Trace,
        TracingLevel::DEBUG => Level::Debug,
        TracingLevel::INFO => Level::Information,
        TracingLevel::WARN => Level::Warning,
        TracingLevel::ERROR => Level::Error,
    }
}

/// The most permissive tracing filter that still admits `level`.
///
/// `Critical` has no tracing counterpart and shares `ERROR`. `None` and
/// unrecognized levels disable output.
pub fn level_filter(level: Level) -> LevelFilter {
    match level {
        Level::Trace => LevelFilter::TRACE,
        Level::Debug => LevelFilter::DEBUG,
        Level::Information => LevelFilter::INFO,
        Level::Warning => LevelFilter::WARN,
        Level::Error | Level::Critical => LevelFilter::ERROR,
        Level::None | Level::Unrecognized(_) => LevelFilter::OFF,
    }
}

/// Collects the message, exception, and remaining fields of one event.
#[derive(Default)]
struct EntryVisitor {
    /// Captured `message` field, if present.
    msg: Option<String>,
    /// Captured exception text, if present.
    exception: Option<String>,
    /// Accumulated remaining fields rendered as `key=value`.
    fields: String,
}

impl EntryVisitor {
    /// Merge message and fields into the final message text.
    fn message(&self) -> Option<String> {
        let fields = self.fields.trim_end();
        match (&self.msg, fields.is_empty()) {
            (Some(msg), true) => Some(msg.clone()),
            (Some(msg), false) => Some(format!("{} {}", msg, fields)),
            (None, false) => Some(fields.to_string()),
            (None, true) => None,
        }
    }
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.msg = Some(value.to_string()),
            name if EXCEPTION_FIELDS.contains(&name) => {
                self.exception = Some(value.to_string());
            }
            name => {
                let _ignored = write!(&mut self.fields, "{}=\"{}\" ", name, value);
            }
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn StdError + 'static)) {
        if EXCEPTION_FIELDS.contains(&field.name()) {
            self.exception = Some(render_error_chain(value));
        } else {
            let _ignored = write!(&mut self.fields, "{}=\"{}\" ", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.msg = Some(format!("{:?}", value)),
            name if EXCEPTION_FIELDS.contains(&name) => {
                self.exception = Some(format!("{:?}", value));
            }
            name => {
                let _ignored = write!(&mut self.fields, "{}={:?} ", name, value);
            }
        }
    }
}

/// `tracing_subscriber` event formatter backed by an [`EntryFormatter`].
#[derive(Debug, Clone)]
pub struct EntryFormat {
    /// Reference point for elapsed times.
    start: Instant,
    /// Labels and formatting function.
    formatter: EntryFormatter,
}

impl Default for EntryFormat {
    fn default() -> Self {
        Self::new(EntryFormatter::default())
    }
}

impl EntryFormat {
    /// Measure elapsed time from now.
    pub fn new(formatter: EntryFormatter) -> Self {
        Self::with_start(formatter, Instant::now())
    }

    /// Measure elapsed time from `start`.
    pub fn with_start(formatter: EntryFormatter, start: Instant) -> Self {
        Self { start, formatter }
    }

    /// Build the entry for `event` within the span context `ctx`.
    pub fn prepare<S, N>(&self, ctx: &FmtContext<'_, S, N>, event: &Event<'_>) -> PreparedLogEntry
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
        N: for<'a> FormatFields<'a> + 'static,
    {
        let meta = event.metadata();
        let mut vis = EntryVisitor::default();
        event.record(&mut vis);

        let level = level_from_tracing(meta.level());
        let mut entry =
            PreparedLogEntry::new(self.start.elapsed(), level).with_category(meta.target());
        if let Some(scope) = ctx.event_scope() {
            entry.scopes = scope
                .from_root()
                .map(|span| {
                    let ext = span.extensions();
                    match ext.get::<FormattedFields<N>>() {
                        Some(fields) if !fields.is_empty() => {
                            format!("{}{{{}}}", span.name(), fields)
                        }
                        _ => span.name().to_string(),
                    }
                })
                .collect();
        }
        entry.message = vis.message();
        entry.exception = vis.exception;
        entry
    }
}

impl<S, N> FormatEvent<S, N> for EntryFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let entry = self.prepare(ctx, event);
        self.formatter.format(&entry, &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_levels_map_in_order() {
        let mapped: Vec<Level> = [
            TracingLevel::TRACE,
            TracingLevel::DEBUG,
            TracingLevel::INFO,
            TracingLevel::WARN,
            TracingLevel::ERROR,
        ]
        .iter()
        .map(level_from_tracing)
        .collect();
        assert_eq!(
            mapped,
            vec![
                Level::Trace,
                Level::Debug,
                Level::Information,
                Level::Warning,
                Level::Error
            ]
        );
    }

    #[test]
    fn level_filters_cover_every_level() {
        assert_eq!(level_filter(Level::Trace), LevelFilter::TRACE);
        assert_eq!(level_filter(Level::Information), LevelFilter::INFO);
        assert_eq!(level_filter(Level::Critical), LevelFilter::ERROR);
        assert_eq!(level_filter(Level::None), LevelFilter::OFF);
        assert_eq!(level_filter(Level::from_raw(12)), LevelFilter::OFF);
    }

    #[test]
    fn visitor_merges_message_and_fields() {
        let mut vis = EntryVisitor {
            msg: Some("hello".into()),
            ..Default::default()
        };
        assert_eq!(vis.message().as_deref(), Some("hello"));
        vis.fields.push_str("user=\"ann\" n=3 ");
        assert_eq!(vis.message().as_deref(), Some("hello user=\"ann\" n=3"));
        vis.msg = None;
        assert_eq!(vis.message().as_deref(), Some("user=\"ann\" n=3"));
        vis.fields.clear();
        assert_eq!(vis.message(), None);
    }
}
