//! Builds the literal text of one log line.
//!
//! Segment order is fixed: `prefix [tag " :: "] caller " () " body`, then the
//! optional `HH:MM:SS.mmm ` timestamp at position 0, then the optional
//! execution-context annotation at the end. The console copy may additionally
//! be wrapped in color markup; the file copy never is.

use super::color::{LogColor, markup};
use super::context::ExecutionContext;
use crate::config::Config;
use crate::host::Host;
use crate::level::Level;

const TAG_SEPARATOR: &str = " :: ";
const CALLER_SEPARATOR: &str = " () ";
const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Console and file renditions of the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub console: String,
    pub file: String,
}

/// Formatting switches frozen from [`Config`] when the logger is built.
#[derive(Debug, Clone)]
pub struct RecordFormatter {
    prefix: String,
    show_time: bool,
    show_context: bool,
    /// Color on and a console that understands markup.
    markup: bool,
    file_marker: bool,
}

impl RecordFormatter {
    #[must_use]
    pub fn new(config: &Config, color_capable_console: bool) -> Self {
        Self {
            prefix: config.prefix.clone(),
            show_time: config.enable_show_time,
            show_context: config.enable_show_execution_context,
            markup: config.enable_color && color_capable_console,
            file_marker: config.enable_file_level_marker,
        }
    }

    /// Whether [`enrich`](Self::enrich) wants an [`ExecutionContext`]. Callers skip classifying the thread otherwise.
    #[must_use]
    pub const fn shows_context(&self) -> bool {
        self.show_context
    }

    /// Prefix, optional tag, caller label and message, in that order.
    #[must_use]
    pub fn compose(&self, tag: Option<&str>, caller: &str, message: &str) -> String {
        let tag_len = tag.map_or(0, |t| t.len() + TAG_SEPARATOR.len());
        let mut line = String::with_capacity(
            self.prefix.len() + tag_len + caller.len() + CALLER_SEPARATOR.len() + message.len(),
        );
        line.push_str(&self.prefix);
        if let Some(tag) = tag {
            line.push_str(tag);
            line.push_str(TAG_SEPARATOR);
        }
        line.push_str(caller);
        line.push_str(CALLER_SEPARATOR);
        line.push_str(message);
        line
    }

    /// Adds time and context enrichment, then splits into console and file copies.
    #[must_use]
    pub fn enrich(
        &self,
        mut line: String,
        level: Level,
        color: LogColor,
        context: Option<&ExecutionContext>,
        host: &dyn Host,
    ) -> Rendered {
        if self.show_time {
            let stamp = host.now().format(TIME_FORMAT).to_string();
            line.insert(0, ' ');
            line.insert_str(0, &stamp);
        }

        if self.show_context
            && let Some(context) = context
        {
            line.push(' ');
            line.push_str(&context.annotation(host));
        }

        let console = if self.markup {
            markup(&line, color)
        } else {
            line.clone()
        };

        let file = if self.file_marker {
            line.push(' ');
            line.push_str(level.file_marker());
            line
        } else {
            line
        };

        Rendered { console, file }
    }
}
