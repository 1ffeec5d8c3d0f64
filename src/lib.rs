#![forbid(unsafe_code)]

//! `gamedebug` - leveled application logging with call-site attribution.
//!
//! Every enabled call is rendered once and delivered twice: to a console
//! (a host collaborator, or stdout as a fallback) and to a log file that is
//! created lazily, once per run. Each line is attributed to the function that
//! logged it by walking the stack past this crate's own frames.
//!
//! ```text
//! 14:03:07.219   >>>  Net :: Client::connect () handshake done (at Frame: 812 sec: 13.540)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gamedebug::Logger;
//!
//! let logger = Logger::builder()
//!     .file()
//!         .dir("logs")
//!         .done()
//!     .init()?;
//!
//! logger.info("Application started")?;
//! logger.warning_tagged("Net", "Connection timeout")?;
//! logger.error("Save failed")?;
//! # Ok::<(), gamedebug::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `gamedebug` command-line emitter

pub mod caller;
pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod host;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use caller::{CallerResolver, StackResolver};
pub use config::Config;
pub use error::Error;
pub use fmt::{ExecutionContext, LogColor, RecordFormatter, Rendered};
pub use global::{LogTag, init};
pub use host::{Host, SystemHost};
pub use level::Level;
pub use logger::{FileBuilder, Logger, LoggerBuilder};
pub use output::{Console, ConsoleKind, ConsoleSink, FileSink, TerminalConsole};
