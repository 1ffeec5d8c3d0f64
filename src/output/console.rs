//! The console side of delivery: either a host-supplied collaborator or the
//! fallback terminal. Which one is used is decided once, when the logger is built.

use super::terminal::TerminalConsole;
use crate::level::Level;
use std::any::Any;
use std::sync::Arc;

/// What a bound console can render. Decided at construction, never probed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleKind {
    /// Shows text verbatim.
    #[default]
    Plain,
    /// Understands `<color=#RRGGBB>…</color>` markup.
    ColorCapable,
}

/// A host console (an editor log window, an in-game overlay, …).
///
/// `context` is opaque to the logger and only passed through for host-side correlation.
/// Failures inside an implementation are the implementation's own business.
pub trait ConsoleSink: Send + Sync {
    fn log(&self, text: &str, context: Option<&dyn Any>);
    fn log_warning(&self, text: &str, context: Option<&dyn Any>);
    fn log_error(&self, text: &str, context: Option<&dyn Any>);
}

/// Lets the host keep a handle on the sink it passed in.
impl<T: ConsoleSink + ?Sized> ConsoleSink for Arc<T> {
    fn log(&self, text: &str, context: Option<&dyn Any>) {
        (**self).log(text, context);
    }

    fn log_warning(&self, text: &str, context: Option<&dyn Any>) {
        (**self).log_warning(text, context);
    }

    fn log_error(&self, text: &str, context: Option<&dyn Any>) {
        (**self).log_error(text, context);
    }
}

/// The console adapter the logger delivers to.
pub enum Console {
    Bound {
        sink: Box<dyn ConsoleSink>,
        kind: ConsoleKind,
    },
    Fallback(TerminalConsole),
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound { kind, .. } => f.debug_struct("Bound").field("kind", kind).finish(),
            Self::Fallback(terminal) => f.debug_tuple("Fallback").field(terminal).finish(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::Fallback(TerminalConsole::new())
    }
}

impl Console {
    #[must_use]
    pub fn bound(sink: impl ConsoleSink + 'static, kind: ConsoleKind) -> Self {
        Self::Bound {
            sink: Box::new(sink),
            kind,
        }
    }

    #[must_use]
    pub const fn fallback(terminal: TerminalConsole) -> Self {
        Self::Fallback(terminal)
    }

    /// Only a bound color-capable console gets markup; the terminal colors lines its own way.
    #[must_use]
    pub const fn is_color_capable(&self) -> bool {
        matches!(
            self,
            Self::Bound {
                kind: ConsoleKind::ColorCapable,
                ..
            }
        )
    }

    /// Hands a rendered line to the console. Terminal write errors are dropped.
    pub fn deliver(&self, level: Level, text: &str, context: Option<&dyn Any>) {
        match self {
            Self::Bound { sink, .. } => match level {
                Level::Info => sink.log(text, context),
                Level::Warning => sink.log_warning(text, context),
                Level::Error => sink.log_error(text, context),
            },
            Self::Fallback(terminal) => {
                let _ = terminal.write(level, text);
            }
        }
    }
}
