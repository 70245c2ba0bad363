//! Render a [`PreparedLogEntry`] as one text line plus an optional exception block.
//!
//! Line shape:
//!
//! ```text
//! 012.300s [info ] App.Startup: (Request > Handler) started
//! ```
//!
//! Sections are written in a fixed order. The elapsed time, the bracketed
//! label, the `:` separator and the line terminator are always present; the
//! category, scope chain, message, and exception block appear only when the
//! matching predicate on the entry holds.

use std::{
    fmt::{self, Write},
    io,
    time::Duration,
};

use crate::{LabelMap, PreparedLogEntry};

/// Terminates the primary line and the exception block.
pub const LINE_TERMINATOR: &str = "\n";

/// Joins scope names inside the parentheses.
pub const SCOPE_SEPARATOR: &str = " > ";

/// Signature of a function that renders an entry into a text sink.
pub type FormatterFn = fn(&PreparedLogEntry, &LabelMap, &mut dyn Write) -> fmt::Result;

/// The built-in formatter.
///
/// Sink errors are returned as-is; nothing is retried or swallowed.
pub fn format_entry(
    entry: &PreparedLogEntry,
    labels: &LabelMap,
    out: &mut dyn Write,
) -> fmt::Result {
    write_elapsed(out, entry.elapsed)?;
    write_level(out, labels.label(entry.level))?;
    if entry.has_category() {
        write_category(out, entry.category.as_deref().unwrap_or_default())?;
    }
    out.write_char(':')?;
    if entry.has_scopes() {
        write_scopes(out, &entry.scopes)?;
    }
    if entry.has_message() {
        write_message(out, entry.message.as_deref().unwrap_or_default())?;
    }
    out.write_str(LINE_TERMINATOR)?;
    if let Some(text) = &entry.exception {
        write_exception(out, text)?;
    }
    Ok(())
}

/// Seconds with three fractional digits and at least three integer digits.
///
/// Rounds to the nearest millisecond. Durations of 1000s or more widen the
/// integer part instead of truncating it.
fn write_elapsed(out: &mut dyn Write, elapsed: Duration) -> fmt::Result {
    let millis = (elapsed.as_nanos() + 500_000) / 1_000_000;
    write!(out, "{:03}.{:03}s", millis / 1000, millis % 1000)
}

/// ` [label]`
fn write_level(out: &mut dyn Write, label: &str) -> fmt::Result {
    out.write_str(" [")?;
    out.write_str(label)?;
    out.write_char(']')
}

/// ` category`
fn write_category(out: &mut dyn Write, category: &str) -> fmt::Result {
    out.write_char(' ')?;
    out.write_str(category)
}

/// ` (outer > inner)`
fn write_scopes(out: &mut dyn Write, scopes: &[String]) -> fmt::Result {
    out.write_str(" (")?;
    for (i, scope) in scopes.iter().enumerate() {
        if i > 0 {
            out.write_str(SCOPE_SEPARATOR)?;
        }
        out.write_str(scope)?;
    }
    out.write_char(')')
}

/// ` message`, verbatim.
fn write_message(out: &mut dyn Write, message: &str) -> fmt::Result {
    out.write_char(' ')?;
    out.write_str(message)
}

/// Exception text on its own line(s).
fn write_exception(out: &mut dyn Write, text: &str) -> fmt::Result {
    out.write_str(text)?;
    out.write_str(LINE_TERMINATOR)
}

/// A label map bound to a formatting function.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct EntryFormatter {
    /// Labels handed to the formatting function.
    labels: LabelMap,
    /// The function doing the rendering.
    format_fn: FormatterFn,
}

impl Default for EntryFormatter {
    fn default() -> Self {
        Self::new(LabelMap::default())
    }
}

impl EntryFormatter {
    /// Use the built-in [`format_entry`] with `labels`.
    pub fn new(labels: LabelMap) -> Self {
        Self {
            labels,
            format_fn: format_entry,
        }
    }

    /// Substitute a different formatting function.
    #[must_use]
    pub fn with_function(mut self, format_fn: FormatterFn) -> Self {
        self.format_fn = format_fn;
        self
    }

    /// Render `entry` into a text sink.
    pub fn format(&self, entry: &PreparedLogEntry, out: &mut dyn Write) -> fmt::Result {
        (self.format_fn)(entry, &self.labels, out)
    }

    /// Render `entry` into a new string.
    pub fn render(&self, entry: &PreparedLogEntry) -> Result<String, fmt::Error> {
        let mut buf = String::new();
        self.format(entry, &mut buf)?;
        Ok(buf)
    }

    /// Render `entry` and hand it to a byte sink with a single `write_all`.
    ///
    /// The primary line and exception block therefore arrive in one write.
    /// I/O errors from `out` are returned unchanged.
    pub fn write_to<W: io::Write + ?Sized>(
        &self,
        entry: &PreparedLogEntry,
        out: &mut W,
    ) -> io::Result<()> {
        let text = self
            .render(entry)
            .map_err(|_| io::Error::other("log entry formatter failed"))?;
        out.write_all(text.as_bytes())
    }
}
