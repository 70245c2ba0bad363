//! Error types for level parsing and label validation.

use thiserror::Error;

use crate::Level;

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected trace|debug|info|warn|error|critical|none)")]
pub struct ParseLevelError(pub String);

/// Errors produced while validating a custom label map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A label was empty or whitespace-only.
    #[error("label for level '{level}' is empty")]
    EmptyLabel {
        /// Level whose label failed validation.
        level: Level,
    },
    /// A label contained a line break, which would split the rendered line.
    #[error("label for level '{level}' contains a line break")]
    MultilineLabel {
        /// Level whose label failed validation.
        level: Level,
    },
}
