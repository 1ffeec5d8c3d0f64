//! Unified error type for all gamedebug operations.

use std::path::PathBuf;

/// Error type for gamedebug operations.
///
/// Only the file sink and initialization produce errors; console delivery never does.
#[derive(Debug)]
pub enum Error {
    /// The log directory could not be created. The file sink is disabled afterwards.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The log file could not be opened for append. The file sink is disabled afterwards.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line or stack dump could not be written to an already open log file.
    Write(std::io::Error),
    /// The process-wide logger was initialized twice.
    AlreadyInitialized,
    /// Invalid log level string.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "cannot create log directory {}: {source}", path.display())
            }
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "log write failed: {e}"),
            Self::AlreadyInitialized => write!(f, "logger already initialized"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::OpenFile { source, .. } => Some(source),
            Self::Write(e) => Some(e),
            Self::AlreadyInitialized | Self::InvalidLevel(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Write(e)
    }
}
