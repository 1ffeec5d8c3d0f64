//! Fallback console: stdout, tinted white/yellow/red by level for the
//! duration of one line.

use crate::fmt::LogColor;
use crate::level::Level;
use std::io::{self, Write};

/// Writes lines to stdout when no host console is bound.
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Writes one line to stdout.
    ///
    /// # Errors
    /// I/O errors from stdout.
    pub fn write(&self, level: Level, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, level, text)
    }

    /// Writes one line to `out`, restoring the default foreground even if the line itself fails.
    ///
    /// # Errors
    /// I/O errors from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, level: Level, text: &str) -> io::Result<()> {
        let color = self.colors_enabled.then(|| level.default_color());
        let guard = ForegroundGuard::set(out, color)?;
        writeln!(guard.out, "{text}")
    }
}

/// Holds a foreground color for its lifetime and resets it on drop.
struct ForegroundGuard<'a, W: Write> {
    out: &'a mut W,
    active: bool,
}

impl<'a, W: Write> ForegroundGuard<'a, W> {
    fn set(out: &'a mut W, color: Option<LogColor>) -> io::Result<Self> {
        if let Some(color) = color {
            out.write_all(color.fg_ansi().as_bytes())?;
        }
        Ok(Self {
            out,
            active: color.is_some(),
        })
    }
}

impl<W: Write> Drop for ForegroundGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.out.write_all(LogColor::RESET.as_bytes());
        }
        let _ = self.out.flush();
    }
}
