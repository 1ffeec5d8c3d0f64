//! Line rendering: the color table, execution-context annotation and the record formatter.

mod color;
mod context;
mod record;

pub use color::{LogColor, markup};
pub use context::{ExecutionContext, thread_seq};
pub use record::{RecordFormatter, Rendered};
