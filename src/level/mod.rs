//! Severity levels. Each level owns its own enable toggle, default color,
//! console method and file marker.

use crate::fmt::LogColor;
use std::fmt;
use std::str::FromStr;

/// The three severities a caller can emit at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Normal operational milestones.
    #[default]
    Info = 0,
    /// Non-fatal anomalies that may need attention.
    Warning = 1,
    /// Failures. Always carries a stack dump in the log file.
    Error = 2,
}

impl Level {
    /// Lowercase because CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Color used when the caller does not override it.
    #[must_use]
    pub const fn default_color(self) -> LogColor {
        match self {
            Self::Info => LogColor::White,
            Self::Warning => LogColor::Yellow,
            Self::Error => LogColor::Red,
        }
    }

    /// Severity marker appended to file lines, which never carry color.
    #[must_use]
    pub const fn file_marker(self) -> &'static str {
        match self {
            Self::Info => "[N]",
            Self::Warning => "[W]",
            Self::Error => "[E]",
        }
    }

    /// Error lines are always followed by a stack dump, whatever the global toggle says.
    #[must_use]
    pub const fn forces_stack_dump(self) -> bool {
        matches!(self, Self::Error)
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Warning, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "log" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
