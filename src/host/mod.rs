//! The host environment the logger runs inside: wall clock, frame counter,
//! process start, base directory and directory creation.
//!
//! Game loops and tests supply their own [`Host`]; everything else uses [`SystemHost`].

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Services the logging core consumes from its environment.
pub trait Host: Send + Sync {
    /// Wall-clock time for line timestamps, the banner and the log file name.
    fn now(&self) -> DateTime<Local>;

    /// Frame number shown in the main-context annotation.
    fn frame_count(&self) -> u64;

    /// Time since startup shown in the main-context annotation.
    fn elapsed(&self) -> Duration;

    /// Directory the default `Log/` folder is placed under.
    fn base_dir(&self) -> Option<PathBuf>;

    /// Creates `path` and any missing parents.
    ///
    /// # Errors
    /// Whatever the filesystem reports.
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// Lets the host keep a handle on the environment it passed in, e.g. to advance frames.
impl<T: Host + ?Sized> Host for Arc<T> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }

    fn frame_count(&self) -> u64 {
        (**self).frame_count()
    }

    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }

    fn base_dir(&self) -> Option<PathBuf> {
        (**self).base_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}

/// The real process environment.
#[derive(Debug)]
pub struct SystemHost {
    started: Instant,
    frames: AtomicU64,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            frames: AtomicU64::new(0),
        }
    }

    /// Called once per iteration by a host main loop.
    pub fn advance_frame(&self) -> u64 {
        self.frames.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Host for SystemHost {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The executable's directory, else the platform data directory.
    fn base_dir(&self) -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| {
                directories::ProjectDirs::from("", "", "gamedebug")
                    .map(|dirs| dirs.data_dir().to_path_buf())
            })
    }
}

/// `Log/` under the host's base directory; `None` leaves file output disabled.
#[must_use]
pub fn default_log_dir(host: &dyn Host) -> Option<PathBuf> {
    host.base_dir().map(|base| base.join("Log"))
}
