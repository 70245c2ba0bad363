//! Render prepared log entries into concise, deterministic text lines.
//!
//! This crate is the pure core of the logging stack:
//! - [`Level`]: ordered severity with an explicit catch-all for raw values
//!   outside the known range.
//! - [`LabelMap`]: total severity-to-label lookup with a fallback label.
//! - [`PreparedLogEntry`]: the per-call input captured by the host.
//! - [`format_entry`] and [`EntryFormatter`]: the line renderer.
//!
//! Nothing here logs, allocates global state, or touches a sink other than the
//! one passed in.

mod entry;
mod error;
mod format;
mod labels;
mod level;

pub use entry::{PreparedLogEntry, is_present, render_error_chain};
pub use error::{Error, ParseLevelError};
pub use format::{EntryFormatter, FormatterFn, LINE_TERMINATOR, SCOPE_SEPARATOR, format_entry};
pub use labels::LabelMap;
pub use level::{Level, RawLevel};
