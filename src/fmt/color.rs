//! The closed color table. Hosts with a rich-text console receive
//! `<color=#RRGGBB>` markup; the fallback terminal gets 24-bit ANSI escapes
//! built from the same table.

use std::fmt;

/// Named colors a log line can be tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogColor {
    #[default]
    White,
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
    Orange,
    Black,
}

impl LogColor {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Render encoding for the rich-text console, without the leading `#`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::White => "FFFFFF",
            Self::Green => "00FF00",
            Self::Blue => "99CCFF",
            Self::Red => "FF0000",
            Self::Yellow => "FFFF00",
            Self::Purple => "CC6699",
            Self::Orange => "FF9933",
            Self::Black => "000000",
        }
    }

    /// Numeric triple of [`hex`](Self::hex), for terminals.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (0xFF, 0xFF, 0xFF),
            Self::Green => (0x00, 0xFF, 0x00),
            Self::Blue => (0x99, 0xCC, 0xFF),
            Self::Red => (0xFF, 0x00, 0x00),
            Self::Yellow => (0xFF, 0xFF, 0x00),
            Self::Purple => (0xCC, 0x66, 0x99),
            Self::Orange => (0xFF, 0x99, 0x33),
            Self::Black => (0x00, 0x00, 0x00),
        }
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape so callers never hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::White,
            Self::Green,
            Self::Blue,
            Self::Red,
            Self::Yellow,
            Self::Purple,
            Self::Orange,
            Self::Black,
        ]
    }
}

impl fmt::Display for LogColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Wraps text in the rich-text color pair understood by color-capable consoles.
#[must_use]
pub fn markup(text: &str, color: LogColor) -> String {
    format!("<color=#{}>{text}</color>", color.hex())
}
