//! Severity-to-label lookup.

use serde::Deserialize;

use crate::{Error, Level};

/// Immutable mapping from [`Level`] to the short label shown between brackets.
///
/// Lookup is total: every level, including [`Level::Unrecognized`], resolves to
/// a label. The default labels are all five characters wide so that the text
/// after the bracket lines up across levels.
///
/// When deserialized, every field is optional and falls back to its default,
/// so a configuration file only needs to name the labels it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelMap {
    /// Label for [`Level::Trace`].
    trace: String,
    /// Label for [`Level::Debug`].
    debug: String,
    /// Label for [`Level::Information`].
    information: String,
    /// Label for [`Level::Warning`].
    warning: String,
    /// Label for [`Level::Error`].
    error: String,
    /// Label for [`Level::Critical`].
    critical: String,
    /// Label for [`Level::None`].
    none: String,
    /// Fallback for any [`Level::Unrecognized`] value.
    unrecognized: String,
}

impl Default for LabelMap {
    fn default() -> Self {
        Self {
            trace: "trace".into(),
            debug: "debug".into(),
            information: "info ".into(),
            warning: "warn ".into(),
            error: "error".into(),
            critical: "crit ".into(),
            none: "none ".into(),
            unrecognized: "???? ".into(),
        }
    }
}

impl LabelMap {
    /// Resolve the label for `level`. Never fails.
    pub fn label(&self, level: Level) -> &str {
        match level {
            Level::Trace => &self.trace,
            Level::Debug => &self.debug,
            Level::Information => &self.information,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
            Level::Critical => &self.critical,
            Level::None => &self.none,
            Level::Unrecognized(_) => &self.unrecognized,
        }
    }

    /// Resolve the label for a raw host level value.
    pub fn label_for_raw(&self, raw: i32) -> &str {
        self.label(Level::from_raw(raw))
    }

    /// Return a copy with the label for `level` replaced.
    ///
    /// Passing any [`Level::Unrecognized`] value replaces the fallback label.
    #[must_use]
    pub fn with_label(mut self, level: Level, label: impl Into<String>) -> Self {
        *self.slot_mut(level) = label.into();
        self
    }

    /// Check that every label is non-empty and fits on one line.
    pub fn validate(&self) -> Result<(), Error> {
        for level in Level::NAMED.into_iter().chain([Level::from_raw(-1)]) {
            let label = self.label(level);
            if label.trim().is_empty() {
                return Err(Error::EmptyLabel { level });
            }
            if label.contains(['\n', '\r']) {
                return Err(Error::MultilineLabel { level });
            }
        }
        Ok(())
    }

    /// Mutable access to the slot backing `level`.
    fn slot_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::Trace => &mut self.trace,
            Level::Debug => &mut self.debug,
            Level::Information => &mut self.information,
            Level::Warning => &mut self.warning,
            Level::Error => &mut self.error,
            Level::Critical => &mut self.critical,
            Level::None => &mut self.none,
            Level::Unrecognized(_) => &mut self.unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_labels_are_distinct_and_equal_width() {
        let labels = LabelMap::default();
        let all: Vec<&str> = Level::NAMED
            .into_iter()
            .chain([Level::from_raw(99)])
            .map(|l| labels.label(l))
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|l| l.chars().count() == 5));
    }

    #[test]
    fn every_raw_value_resolves() {
        let labels = LabelMap::default();
        for raw in [-1000, -1, 0, 1, 2, 3, 4, 5, 6, 7, 1000, i32::MIN, i32::MAX] {
            assert!(!labels.label_for_raw(raw).trim().is_empty(), "raw {}", raw);
        }
        assert_eq!(labels.label_for_raw(2), "info ");
        assert_eq!(labels.label_for_raw(77), "???? ");
    }

    #[test]
    fn with_label_overrides_one_slot() {
        let labels = LabelMap::default()
            .with_label(Level::Error, "fail ")
            .with_label(Level::from_raw(99), "?    ");
        assert_eq!(labels.label(Level::Error), "fail ");
        assert_eq!(labels.label(Level::from_raw(12)), "?    ");
        assert_eq!(labels.label(Level::Warning), "warn ");
    }

    #[test]
    fn validate_rejects_blank_and_multiline_labels() {
        assert!(LabelMap::default().validate().is_ok());
        let blank = LabelMap::default().with_label(Level::Debug, "  ");
        assert_eq!(
            blank.validate(),
            Err(Error::EmptyLabel {
                level: Level::Debug
            })
        );
        let split = LabelMap::default().with_label(Level::Critical, "cr\nit");
        assert_eq!(
            split.validate(),
            Err(Error::MultilineLabel {
                level: Level::Critical
            })
        );
    }

    #[test]
    fn deserializes_partial_overrides() {
        let labels: LabelMap =
            ron::from_str(r#"(warning: "WARN!", unrecognized: "unk  ")"#).unwrap();
        assert_eq!(labels.label(Level::Warning), "WARN!");
        assert_eq!(labels.label(Level::from_raw(9)), "unk  ");
        assert_eq!(labels.label(Level::Trace), "trace");
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let res: Result<LabelMap, _> = ron::from_str(r#"(warn: "W")"#);
        assert!(res.is_err());
    }
}
