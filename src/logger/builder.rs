//! Stepwise construction of a [`Logger`]: toggles, console, host and caller resolver.

use super::{Logger, Sinks};
use crate::caller::{CallerResolver, StackResolver};
use crate::config::Config;
use crate::fmt::RecordFormatter;
use crate::host::{Host, SystemHost, default_log_dir};
use crate::level::Level;
use crate::output::{Console, ConsoleKind, ConsoleSink, FileSink, TerminalConsole};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::thread::{self, ThreadId};

/// Everything is optional; `build()` fills the gaps with the real process environment.
#[derive(Default)]
pub struct LoggerBuilder {
    config: Config,
    console: Option<Console>,
    host: Option<Box<dyn Host>>,
    resolver: Option<Box<dyn CallerResolver>>,
    main: Option<ThreadId>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every toggle at once.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Turns one level on or off.
    #[must_use]
    pub const fn enable(mut self, level: Level, enabled: bool) -> Self {
        match level {
            Level::Info => self.config.enable_info = enabled,
            Level::Warning => self.config.enable_warning = enabled,
            Level::Error => self.config.enable_error = enabled,
        }
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.config.enable_color = enabled;
        self
    }

    #[must_use]
    pub const fn show_time(mut self, enabled: bool) -> Self {
        self.config.enable_show_time = enabled;
        self
    }

    #[must_use]
    pub const fn show_execution_context(mut self, enabled: bool) -> Self {
        self.config.enable_show_execution_context = enabled;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// The thread whose lines carry the frame/seconds annotation. Defaults to the building thread.
    #[must_use]
    pub const fn main_context(mut self, id: ThreadId) -> Self {
        self.main = Some(id);
        self
    }

    /// Routes console output to a host collaborator instead of stdout.
    #[must_use]
    pub fn console(mut self, sink: impl ConsoleSink + 'static, kind: ConsoleKind) -> Self {
        self.console = Some(Console::bound(sink, kind));
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Host + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Overrides stack-based caller attribution.
    #[must_use]
    pub fn caller_resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// File output has its own concerns (directory, stack dumps, markers) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder { parent: self }
    }

    /// Freezes the configuration. Nothing touches the filesystem until the first line.
    #[must_use]
    pub fn build(self) -> Logger {
        let host = self.host.unwrap_or_else(|| Box::new(SystemHost::new()));
        let console = self.console.unwrap_or_else(|| {
            Console::fallback(TerminalConsole::new().colors(self.config.enable_color))
        });
        let dir = self
            .config
            .log_dir
            .clone()
            .or_else(|| default_log_dir(host.as_ref()));

        Logger {
            formatter: RecordFormatter::new(&self.config, console.is_color_capable()),
            resolver: self.resolver.unwrap_or_else(|| Box::new(StackResolver)),
            main: self.main.unwrap_or_else(|| thread::current().id()),
            sinks: Mutex::new(Sinks {
                console,
                file: FileSink::new(dir),
            }),
            host,
            config: self.config,
        }
    }

    /// [`build`](Self::build) followed by the startup banner.
    ///
    /// # Errors
    /// The log directory or file cannot be created.
    pub fn init(self) -> Result<Logger, crate::Error> {
        let logger = self.build();
        logger.write_banner()?;
        Ok(logger)
    }
}

/// File-output settings, chained back into the parent with [`done`](Self::done).
pub struct FileBuilder {
    parent: LoggerBuilder,
}

impl FileBuilder {
    /// Default `Log/` beside the executable doesn't work for every deployment.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parent.config.log_dir = Some(dir.into());
        self
    }

    /// Turns the file sink on or off entirely.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.parent.config.enable_save_file = enabled;
        self
    }

    /// Stack dump after every line, not only errors.
    #[must_use]
    pub const fn stack_trace(mut self, enabled: bool) -> Self {
        self.parent.config.enable_file_stack_trace = enabled;
        self
    }

    /// ` [N]` / ` [W]` / ` [E]` suffix on file lines.
    #[must_use]
    pub const fn level_marker(mut self, enabled: bool) -> Self {
        self.parent.config.enable_file_level_marker = enabled;
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent
    }
}
