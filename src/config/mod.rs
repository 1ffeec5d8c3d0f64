//! Process-wide toggles, frozen into a [`Logger`](crate::Logger) when it is built.
//!
//! There is no file format of our own. `#[serde(default)]` on every field lets a
//! host embed these toggles in whatever settings document it already has, and a
//! missing section still produces a working logger.

use serde::Deserialize;
use std::path::PathBuf;

/// Prepended to every rendered line.
pub const DEFAULT_PREFIX: &str = "  >>>  ";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Gate for [`Level::Info`](crate::Level::Info).
    pub enable_info: bool,
    /// Gate for [`Level::Warning`](crate::Level::Warning).
    pub enable_warning: bool,
    /// Gate for [`Level::Error`](crate::Level::Error).
    pub enable_error: bool,
    /// Color markup on color-capable consoles and ANSI color on the fallback terminal.
    pub enable_color: bool,
    /// `HH:MM:SS.mmm ` at the start of each line.
    pub enable_show_time: bool,
    /// Main-frame / named-thread / anonymous-thread suffix.
    pub enable_show_execution_context: bool,
    /// Persist lines to the per-run log file.
    pub enable_save_file: bool,
    /// Stack dump after every file line, not just errors.
    pub enable_file_stack_trace: bool,
    /// ` [N]` / ` [W]` / ` [E]` suffix on file lines.
    pub enable_file_level_marker: bool,
    pub prefix: String,
    /// `None` means `Log/` under the host's base directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_info: true,
            enable_warning: true,
            enable_error: true,
            enable_color: true,
            enable_show_time: true,
            enable_show_execution_context: true,
            enable_save_file: true,
            enable_file_stack_trace: false,
            enable_file_level_marker: true,
            prefix: DEFAULT_PREFIX.to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Everything off except the three levels: bare `prefix caller () message` lines, console only.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            enable_show_time: false,
            enable_show_execution_context: false,
            enable_save_file: false,
            enable_file_level_marker: false,
            ..Self::default()
        }
    }
}
