//! The logging facade. Every leveled call funnels into one pipeline:
//! gate, resolve the caller, render, console, file.
//!
//! A disabled level costs one flag check: no stack walk, no formatting, no lock.

mod builder;

pub use builder::{FileBuilder, LoggerBuilder};

use crate::caller::CallerResolver;
use crate::config::Config;
use crate::fmt::{ExecutionContext, LogColor, RecordFormatter};
use crate::host::Host;
use crate::level::Level;
use crate::output::{Console, FileSink, file_chunk};
use parking_lot::Mutex;
use std::any::Any;
use std::path::PathBuf;
use std::thread::ThreadId;

const BANNER_RULE: &str =
    "===============================================================================";
const BANNER_TITLE: &str =
    "====================================GameDebug===================================";
const BANNER_CLOSE: &str =
    "================================================================================";

/// Both sinks sit behind one lock so a console color swap and the matching
/// file write never interleave with another caller's.
#[derive(Debug)]
struct Sinks {
    console: Console,
    file: FileSink,
}

/// Configuration is frozen at build time; only the sinks are mutable afterwards.
pub struct Logger {
    config: Config,
    formatter: RecordFormatter,
    resolver: Box<dyn CallerResolver>,
    host: Box<dyn Host>,
    main: ThreadId,
    sinks: Mutex<Sinks>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("main", &self.main)
            .field("sinks", &self.sinks)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether a call at `level` would do any work.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Info => self.config.enable_info,
            Level::Warning => self.config.enable_warning,
            Level::Error => self.config.enable_error,
        }
    }

    /// Core dispatch with the level's default color and no console context.
    ///
    /// # Errors
    /// File-sink failures; see [`FileSink::append`].
    pub fn emit(&self, level: Level, tag: Option<&str>, message: &str) -> Result<(), crate::Error> {
        self.emit_full(level, tag, message, None, None)
    }

    /// Core dispatch with a per-call color and an opaque value passed through to a bound console.
    ///
    /// # Errors
    /// File-sink failures; see [`FileSink::append`].
    pub fn emit_full(
        &self,
        level: Level,
        tag: Option<&str>,
        message: &str,
        color: Option<LogColor>,
        context: Option<&dyn Any>,
    ) -> Result<(), crate::Error> {
        if !self.enabled(level) {
            return Ok(());
        }

        let caller = self.resolver.resolve();
        let line = self.formatter.compose(tag, &caller, message);
        self.deliver(
            line,
            level,
            color.unwrap_or_else(|| level.default_color()),
            context,
            level.forces_stack_dump() || self.config.enable_file_stack_trace,
        )
    }

    /// Enriches a composed line and hands it to the console, then the file.
    /// `dump_stack` is final here; the file sink adds nothing of its own.
    /// Everything, including the stack dump, is built before the sinks are locked.
    fn deliver(
        &self,
        line: String,
        level: Level,
        color: LogColor,
        context: Option<&dyn Any>,
        dump_stack: bool,
    ) -> Result<(), crate::Error> {
        let exec = self
            .formatter
            .shows_context()
            .then(|| ExecutionContext::current(self.main));
        let rendered = self
            .formatter
            .enrich(line, level, color, exec.as_ref(), self.host.as_ref());
        let chunk = self
            .config
            .enable_save_file
            .then(|| file_chunk(&rendered.file, dump_stack));

        let mut sinks = self.sinks.lock();
        sinks.console.deliver(level, &rendered.console, context);
        if let Some(chunk) = chunk {
            sinks.file.append(&chunk, self.host.as_ref())?;
        }
        Ok(())
    }

    /// Startup banner: rules, title, time and log directory, as Info lines in black.
    /// Bypasses the Info gate and never carries a stack dump, whatever the stack-trace toggle says.
    ///
    /// # Errors
    /// The first file-sink failure, which is where a misconfigured log directory surfaces.
    pub fn write_banner(&self) -> Result<(), crate::Error> {
        let stamp = self.host.now().format("%H:%M:%S%.3f").to_string();
        let dir = self
            .log_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_default();

        let lines = [
            BANNER_RULE.to_string(),
            BANNER_TITLE.to_string(),
            BANNER_RULE.to_string(),
            format!("Time:\t{stamp}"),
            format!("Path:\t{dir}"),
            BANNER_CLOSE.to_string(),
        ];
        for line in lines {
            self.deliver(line, Level::Info, LogColor::Black, None, false)?;
        }
        Ok(())
    }

    /// Normal operational milestones.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn info(&self, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Info, None, message)
    }

    /// Non-fatal anomalies.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn warning(&self, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Warning, None, message)
    }

    /// Failures. The file copy is followed by a stack dump.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn error(&self, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Error, None, message)
    }

    /// [`info`](Self::info) attributed to a subsystem tag.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn info_tagged(&self, tag: &str, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Info, Some(tag), message)
    }

    /// [`warning`](Self::warning) attributed to a subsystem tag.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn warning_tagged(&self, tag: &str, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Warning, Some(tag), message)
    }

    /// [`error`](Self::error) attributed to a subsystem tag.
    ///
    /// # Errors
    /// File-sink failures.
    pub fn error_tagged(&self, tag: &str, message: &str) -> Result<(), crate::Error> {
        self.emit(Level::Error, Some(tag), message)
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Directory the log file is (or would be) created in.
    #[must_use]
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.sinks.lock().file.dir().map(PathBuf::from)
    }

    /// The log file of this run, once it has been opened.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.sinks.lock().file.path().map(PathBuf::from)
    }

    /// True once file output has been given up on for the rest of the run.
    #[must_use]
    pub fn file_disabled(&self) -> bool {
        self.sinks.lock().file.is_disabled()
    }
}
