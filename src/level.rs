//! Severity levels for log records.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record.
///
/// Levels are ordered from least to most severe. A backend that is
/// enabled at some level also processes every level above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Verbose debugging information
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General information
    Info = 2,
    /// Warning messages
    Warn = 3,
    /// Error messages
    Error = 4,
}

impl Level {
    /// Converts from u8 representation.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the level name for display and filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, case-insensitively.
    ///
    /// Accepts the names produced by [`Level::as_str`], which is how
    /// thresholds arrive from environment variables and config files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else if trimmed.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if trimmed.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if trimmed.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if trimmed.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else {
            Err(ParseLevelError(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(Level::from_u8(0), Some(Level::Trace));
        assert_eq!(Level::from_u8(2), Some(Level::Info));
        assert_eq!(Level::from_u8(4), Some(Level::Error));
        assert_eq!(Level::from_u8(5), None);
        assert_eq!(Level::from_u8(255), None);
    }

    #[test]
    fn test_level_u8_round_trip() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
        ] {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Trace.to_string(), "trace");
        assert_eq!(Level::Error.to_string(), "error");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" warn ".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = "severe".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("severe"));
    }
}
