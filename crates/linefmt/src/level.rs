//! Severity levels for prepared log entries.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};

use crate::error::ParseLevelError;

/// Ordered severity of a log entry.
///
/// The named variants follow the host convention `Trace < Debug < Information <
/// Warning < Error < Critical`, followed by the `None` sentinel. Raw values the
/// host hands over that fall outside that set are kept as [`Level::Unrecognized`]
/// rather than rejected, so label lookup always has something to resolve.
///
/// Levels order by their raw value, so an unrecognized negative value sorts
/// below `Trace` and one above 6 sorts above `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Most verbose diagnostics.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    Information,
    /// Something unexpected that did not stop the operation.
    Warning,
    /// An operation failed.
    Error,
    /// The process or a subsystem cannot continue.
    Critical,
    /// Sentinel for "logging disabled"; should not reach a formatter.
    None,
    /// A raw level value outside the known range. Built only by [`Level::from_raw`].
    Unrecognized(RawLevel),
}

/// A raw level value known to fall outside `0..=6`.
///
/// Only [`Level::from_raw`] creates one, so `Unrecognized` can never alias a
/// named level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawLevel(i32);

impl RawLevel {
    /// The raw host value.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl Level {
    /// All named levels in ascending order, excluding the catch-all.
    pub const NAMED: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::None,
    ];

    /// Map a raw host value (`0..=6`) to a level. Never fails.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Information,
            3 => Self::Warning,
            4 => Self::Error,
            5 => Self::Critical,
            6 => Self::None,
            other => Self::Unrecognized(RawLevel(other)),
        }
    }

    /// The raw host value for this level.
    pub fn raw(self) -> i32 {
        match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Information => 2,
            Self::Warning => 3,
            Self::Error => 4,
            Self::Critical => 5,
            Self::None => 6,
            Self::Unrecognized(raw) => raw.value(),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::None => "none",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for Level {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) => write!(f, "unrecognized({})", raw.value()),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts level names and raw integer values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(raw) = s.trim().parse::<i32>() {
            return Ok(Self::from_raw(raw));
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" | "information" => Ok(Self::Information),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "crit" | "critical" => Ok(Self::Critical),
            "none" | "off" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Accepts a level name or a raw integer.
struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level name or a raw level integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Level, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Level, E> {
        i32::try_from(v)
            .map(Level::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Level, E> {
        i32::try_from(v)
            .map(Level::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips_for_named_levels() {
        for level in Level::NAMED {
            assert_eq!(Level::from_raw(level.raw()), level);
        }
    }

    #[test]
    fn out_of_range_raw_is_unrecognized() {
        assert!(matches!(Level::from_raw(7), Level::Unrecognized(r) if r.value() == 7));
        assert!(matches!(Level::from_raw(-1), Level::Unrecognized(r) if r.value() == -1));
        assert_eq!(Level::from(i32::MAX).raw(), i32::MAX);
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Information);
        assert!(Level::Information < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::None);
    }

    #[test]
    fn unrecognized_orders_by_raw_value() {
        assert!(Level::from_raw(-5) < Level::Trace);
        assert!(Level::from_raw(7) > Level::None);
        assert!(Level::from_raw(-5) < Level::from_raw(-1));
        assert_ne!(Level::from_raw(3), Level::from_raw(30));
        assert_eq!(Level::from_raw(3), Level::Warning);
    }

    #[test]
    fn parses_raw_integers() {
        assert_eq!("2".parse::<Level>().unwrap(), Level::Information);
        assert_eq!(" 5 ".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("-3".parse::<Level>().unwrap().raw(), -3);
    }

    #[test]
    fn deserializes_names_and_integers() {
        assert_eq!(ron::from_str::<Level>(r#""warn""#).unwrap(), Level::Warning);
        assert_eq!(ron::from_str::<Level>("2").unwrap(), Level::Information);
        assert_eq!(ron::from_str::<Level>("-4").unwrap().raw(), -4);
        assert!(ron::from_str::<Level>("4294967296").is_err());
        assert!(ron::from_str::<Level>(r#""loud""#).is_err());
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Information);
        assert_eq!(" WARN ".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("off".parse::<Level>().unwrap(), Level::None);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn display_includes_raw_for_unrecognized() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::from_raw(42).to_string(), "unrecognized(42)");
    }
}
