//! One log file per process run.
//!
//! The file is created lazily on the first line that needs it and named after
//! the wall-clock second it was opened. Every chunk is written and flushed
//! before `append` returns; the file is never rotated or truncated.
//!
//! Chunks are built with [`file_chunk`] before the sink is touched, so the
//! stack walk never runs under the logger's lock.

use crate::caller::{StackLine, capture_stack};
use crate::host::Host;
use crate::internal;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const UNKNOWN: &str = "<unknown>";

/// `YYYY_MM_DDTHH_MM_SS.log`: the sortable ISO-8601 form with `-` and `:`
/// replaced and spaces dropped.
#[must_use]
pub fn file_name(now: DateTime<Local>) -> String {
    let iso = now.format("%Y-%m-%dT%H:%M:%S").to_string();
    format!("{}.log", iso.replace(['-', ':'], "_").replace(' ', ""))
}

/// One line of file text, followed by a dump of the calling stack when `dump_stack` is set.
#[must_use]
pub fn file_chunk(text: &str, dump_stack: bool) -> String {
    let mut chunk = String::with_capacity(text.len() + 1);
    chunk.push_str(text);
    chunk.push('\n');
    if dump_stack {
        for frame in capture_stack() {
            let _ = writeln!(chunk, "{}", format_stack_line(&frame));
        }
    }
    chunk
}

/// Dump line for one frame. Missing pieces get a placeholder so every frame yields exactly one line.
#[must_use]
pub fn format_stack_line(frame: &StackLine) -> String {
    format!(
        "     file: {}  line: {}  fn: {}",
        frame.file.as_deref().unwrap_or(UNKNOWN),
        frame.line.unwrap_or(0),
        frame.function.as_deref().unwrap_or(UNKNOWN),
    )
}

#[derive(Debug)]
enum State {
    /// Nothing attempted yet.
    Pending,
    Open { path: PathBuf, file: File },
    /// No directory configured, or the first open failed. Never retried.
    Disabled,
}

/// Lazily opened append-only log file.
#[derive(Debug)]
pub struct FileSink {
    dir: Option<PathBuf>,
    state: State,
}

impl FileSink {
    #[must_use]
    pub const fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            state: State::Pending,
        }
    }

    /// The directory lines go to, if one is configured.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// The open file, once the first line has been written.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.state {
            State::Open { path, .. } => Some(path),
            State::Pending | State::Disabled => None,
        }
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self.state, State::Disabled)
    }

    /// Appends a finished chunk (see [`file_chunk`]) in a single write.
    ///
    /// # Errors
    /// [`Error::CreateDir`](crate::Error::CreateDir) and
    /// [`Error::OpenFile`](crate::Error::OpenFile) on the first call only, after
    /// which the sink stays disabled; [`Error::Write`](crate::Error::Write) on any
    /// later failure, after which the next call tries again.
    pub fn append(&mut self, chunk: &str, host: &dyn Host) -> Result<(), crate::Error> {
        if matches!(self.state, State::Pending) {
            self.open(host)?;
        }
        let State::Open { path, file } = &mut self.state else {
            return Ok(());
        };

        let written = file.write_all(chunk.as_bytes()).and_then(|()| file.flush());
        if let Err(e) = written {
            internal::error("FILE", &format!("Write to {} failed: {e}", path.display()));
            return Err(crate::Error::Write(e));
        }
        Ok(())
    }

    /// First-use initialization. Leaves the state `Open` or `Disabled`, never `Pending`.
    fn open(&mut self, host: &dyn Host) -> Result<(), crate::Error> {
        let Some(dir) = self.dir.clone().filter(|d| !d.as_os_str().is_empty()) else {
            internal::debug("FILE", "No log directory configured, file output disabled");
            self.state = State::Disabled;
            return Ok(());
        };

        if !dir.is_dir() {
            if let Err(source) = host.create_dir_all(&dir) {
                internal::error(
                    "FILE",
                    &format!("Failed to create directory {}: {source}", dir.display()),
                );
                internal::warn("FILE", "File output disabled for this run");
                self.state = State::Disabled;
                return Err(crate::Error::CreateDir { path: dir, source });
            }
            internal::debug("FILE", &format!("Created directory: {}", dir.display()));
        }

        let path = dir.join(file_name(host.now()));
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                internal::debug("FILE", &format!("Opened log file: {}", path.display()));
                self.state = State::Open { path, file };
                Ok(())
            }
            Err(source) => {
                internal::error(
                    "FILE",
                    &format!("Failed to open {}: {source}", path.display()),
                );
                internal::warn("FILE", "File output disabled for this run");
                self.state = State::Disabled;
                Err(crate::Error::OpenFile { path, source })
            }
        }
    }
}
