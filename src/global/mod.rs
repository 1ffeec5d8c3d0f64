//! The process-wide logger behind the free functions, the [`LogTag`] trait and
//! the `log_*!` macros.
//!
//! Uses `OnceLock` so the logger is installed exactly once. Calls made before
//! [`init`] silently do nothing.

use crate::fmt::LogColor;
use crate::level::Level;
use crate::logger::{Logger, LoggerBuilder};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Builds and installs the process-wide logger, then writes the startup banner.
///
/// The logger stays installed even when the banner fails; the error only reports
/// that file output is unavailable for this run.
///
/// # Errors
/// [`Error::AlreadyInitialized`](crate::Error::AlreadyInitialized) on a second call,
/// otherwise the banner's file-sink failure.
pub fn init(builder: LoggerBuilder) -> Result<&'static Logger, crate::Error> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        builder.build()
    });
    if !fresh {
        return Err(crate::Error::AlreadyInitialized);
    }
    logger.write_banner()?;
    Ok(logger)
}

/// The installed logger, if any.
#[must_use]
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// False before [`init`], so macros skip formatting entirely.
#[must_use]
pub fn enabled(level: Level) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

/// # Errors
/// File-sink failures.
pub fn emit(level: Level, tag: Option<&str>, message: &str) -> Result<(), crate::Error> {
    emit_colored(level, tag, message, None)
}

/// # Errors
/// File-sink failures.
pub fn emit_colored(
    level: Level,
    tag: Option<&str>,
    message: &str,
    color: Option<LogColor>,
) -> Result<(), crate::Error> {
    match LOGGER.get() {
        Some(logger) => logger.emit_full(level, tag, message, color, None),
        None => Ok(()),
    }
}

/// # Errors
/// File-sink failures.
pub fn info(message: &str) -> Result<(), crate::Error> {
    emit(Level::Info, None, message)
}

/// # Errors
/// File-sink failures.
pub fn warning(message: &str) -> Result<(), crate::Error> {
    emit(Level::Warning, None, message)
}

/// # Errors
/// File-sink failures.
pub fn error(message: &str) -> Result<(), crate::Error> {
    emit(Level::Error, None, message)
}

/// A type that belongs to a logical subsystem. Its lines carry the tag before the caller label.
///
/// ```
/// use gamedebug::LogTag;
///
/// struct Net;
///
/// impl LogTag for Net {
///     fn log_tag(&self) -> &str {
///         "Net"
///     }
/// }
///
/// // Before `gamedebug::init` this is a no-op.
/// Net.log_info("connected").unwrap();
/// ```
pub trait LogTag {
    fn log_tag(&self) -> &str;

    /// # Errors
    /// File-sink failures.
    fn log_info(&self, message: &str) -> Result<(), crate::Error> {
        emit(Level::Info, Some(self.log_tag()), message)
    }

    /// # Errors
    /// File-sink failures.
    fn log_warning(&self, message: &str) -> Result<(), crate::Error> {
        emit(Level::Warning, Some(self.log_tag()), message)
    }

    /// # Errors
    /// File-sink failures.
    fn log_error(&self, message: &str) -> Result<(), crate::Error> {
        emit(Level::Error, Some(self.log_tag()), message)
    }
}

/// Emits through the process-wide logger, formatting only when the level is enabled.
///
/// Evaluates to `Result<(), gamedebug::Error>`.
///
/// ```
/// use gamedebug::{Level, emit};
///
/// let _ = emit!(Level::Warning, "retry {} of {}", 1, 3);
/// let _ = emit!(Level::Info, tag: "Net", "connected to {}", "example.org");
/// ```
#[macro_export]
macro_rules! emit {
    ($level:expr, tag: $tag:expr, $($arg:tt)+) => {{
        let level = $level;
        if $crate::global::enabled(level) {
            $crate::global::emit(level, ::core::option::Option::Some($tag), &::std::format!($($arg)+))
        } else {
            ::core::result::Result::<(), $crate::Error>::Ok(())
        }
    }};
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if $crate::global::enabled(level) {
            $crate::global::emit(level, ::core::option::Option::None, &::std::format!($($arg)+))
        } else {
            ::core::result::Result::<(), $crate::Error>::Ok(())
        }
    }};
}

/// [`emit!`] at [`Level::Info`].
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::emit!($crate::Level::Info, $($arg)+)
    };
}

/// [`emit!`] at [`Level::Warning`].
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::emit!($crate::Level::Warning, $($arg)+)
    };
}

/// [`emit!`] at [`Level::Error`].
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::emit!($crate::Level::Error, $($arg)+)
    };
}
