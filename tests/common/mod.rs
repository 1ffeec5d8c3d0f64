//! Spy console and deterministic hosts shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use gamedebug::{ConsoleSink, Host, Level};
use std::any::Any;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Records every line handed to it, with the level method that was used
/// and any `u32` passed as console context.
#[derive(Default)]
pub struct SpyConsole {
    lines: Mutex<Vec<(Level, String)>>,
    contexts: Mutex<Vec<Option<u32>>>,
}

impl SpyConsole {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, text)| text).collect()
    }

    pub fn count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn contexts(&self) -> Vec<Option<u32>> {
        self.contexts.lock().unwrap().clone()
    }

    fn push(&self, level: Level, text: &str, context: Option<&dyn Any>) {
        self.lines.lock().unwrap().push((level, text.to_string()));
        self.contexts
            .lock()
            .unwrap()
            .push(context.and_then(|c| c.downcast_ref::<u32>()).copied());
    }
}

impl ConsoleSink for SpyConsole {
    fn log(&self, text: &str, context: Option<&dyn Any>) {
        self.push(Level::Info, text, context);
    }

    fn log_warning(&self, text: &str, context: Option<&dyn Any>) {
        self.push(Level::Warning, text, context);
    }

    fn log_error(&self, text: &str, context: Option<&dyn Any>) {
        self.push(Level::Error, text, context);
    }
}

/// Frozen clock, frame 42, 1.5 s since start. Can be told to refuse directory creation.
pub struct FixedHost {
    pub base: PathBuf,
    pub deny_dirs: bool,
    pub dir_attempts: AtomicUsize,
}

impl FixedHost {
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
            deny_dirs: false,
            dir_attempts: AtomicUsize::new(0),
        }
    }

    pub fn denying(base: &Path) -> Self {
        Self {
            deny_dirs: true,
            ..Self::new(base)
        }
    }

    pub fn attempts(&self) -> usize {
        self.dir_attempts.load(Ordering::SeqCst)
    }
}

pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap() + chrono::Duration::milliseconds(250)
}

impl Host for FixedHost {
    fn now(&self) -> DateTime<Local> {
        fixed_now()
    }

    fn frame_count(&self) -> u64 {
        42
    }

    fn elapsed(&self) -> Duration {
        Duration::from_millis(1500)
    }

    fn base_dir(&self) -> Option<PathBuf> {
        Some(self.base.clone())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dir_attempts.fetch_add(1, Ordering::SeqCst);
        if self.deny_dirs {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        std::fs::create_dir_all(path)
    }
}

/// Name the fixed host's clock produces.
pub const FIXED_FILE_NAME: &str = "2024_03_09T07_05_01.log";

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
