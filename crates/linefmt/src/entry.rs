//! The per-call input to a formatter.

use std::{error::Error as StdError, fmt::Write as _, time::Duration};

use crate::Level;

/// A fully captured log event, ready to render.
///
/// Built fresh by the host for every log call. Formatting only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLogEntry {
    /// Time since the host's reference point.
    pub elapsed: Duration,
    /// Severity.
    pub level: Level,
    /// Log source, typically a component or module path.
    pub category: Option<String>,
    /// Active logical contexts, outermost first.
    pub scopes: Vec<String>,
    /// Message text.
    pub message: Option<String>,
    /// Rendered error text, printed on its own lines after the entry.
    pub exception: Option<String>,
}

impl PreparedLogEntry {
    /// Create an entry with only the required fields set.
    pub fn new(elapsed: Duration, level: Level) -> Self {
        Self {
            elapsed,
            level,
            category: None,
            scopes: Vec::new(),
            message: None,
            exception: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Append one scope, innermost so far.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Replace the scope chain.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set already-rendered exception text.
    #[must_use]
    pub fn with_exception(mut self, text: impl Into<String>) -> Self {
        self.exception = Some(text.into());
        self
    }

    /// Render `err` and its source chain as the exception text.
    #[must_use]
    pub fn with_error(self, err: &(dyn StdError + 'static)) -> Self {
        self.with_exception(render_error_chain(err))
    }

    /// True when the category has visible text.
    pub fn has_category(&self) -> bool {
        is_present(self.category.as_deref())
    }

    /// True when at least one scope is active.
    pub fn has_scopes(&self) -> bool {
        !self.scopes.is_empty()
    }

    /// True when the message has visible text.
    pub fn has_message(&self) -> bool {
        is_present(self.message.as_deref())
    }

    /// True when an exception was attached.
    pub fn has_exception(&self) -> bool {
        self.exception.is_some()
    }
}

/// Optional text counts as present only when it has a non-whitespace character.
pub fn is_present(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Render an error followed by one `Caused by:` line per source.
pub fn render_error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ignored = write!(out, "\nCaused by: {}", cause);
        source = cause.source();
    }
    out
}
