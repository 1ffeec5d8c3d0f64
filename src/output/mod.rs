//! Where rendered lines go: a console (bound host collaborator or fallback
//! terminal) and the per-run log file.

mod console;
mod file;
mod terminal;

pub use console::{Console, ConsoleKind, ConsoleSink};
pub use file::{FileSink, file_chunk, file_name, format_stack_line};
pub use terminal::TerminalConsole;
