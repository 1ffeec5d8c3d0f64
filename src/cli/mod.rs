//! Command-line emitter: pushes one line through the full pipeline, mostly
//! useful for checking a deployment's log directory and console colors.

use crate::level::Level;
use crate::logger::Logger;
use crate::{Config, internal};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
        }
    }
}

/// gamedebug - emit a log line from the command line.
#[derive(Debug, Parser)]
#[command(name = "gamedebug", version, about = "Emit a log line from the command line")]
pub struct Cli {
    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
    /// Subsystem tag shown before the caller
    #[arg(long)]
    pub tag: Option<String>,
    /// Caller label (there is no application frame to attribute the line to)
    #[arg(long, default_value = "cli")]
    pub caller: String,
    /// Log directory (defaults to Log/ beside the executable)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Disable terminal colors
    #[arg(long)]
    pub no_color: bool,
    /// Omit the leading timestamp
    #[arg(long)]
    pub no_time: bool,
    /// Console only, no log file
    #[arg(long)]
    pub no_file: bool,
    /// Append a stack dump to the file line regardless of level
    #[arg(long)]
    pub stack: bool,
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Toggles implied by the flags.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            enable_color: !self.no_color,
            enable_show_time: !self.no_time,
            enable_save_file: !self.no_file,
            enable_file_stack_trace: self.stack,
            log_dir: self.dir.clone(),
            ..Config::default()
        }
    }
}

/// Runs one invocation.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let caller = cli.caller.clone();
    let logger = Logger::builder()
        .config(cli.config())
        .caller_resolver(move || caller.clone())
        .build();

    if !cli.no_banner
        && let Err(e) = logger.write_banner()
    {
        internal::error("CLI", &format!("Banner failed: {e}"));
        eprintln!("gamedebug: {e}");
        return ExitCode::FAILURE;
    }

    let message = cli.message.join(" ");
    match logger.emit(cli.level.into(), cli.tag.as_deref(), &message) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gamedebug: {e}");
            ExitCode::FAILURE
        }
    }
}
