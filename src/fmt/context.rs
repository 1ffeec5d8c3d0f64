//! Which execution context a line came from: the designated main thread,
//! a named worker, or an anonymous one.

use crate::host::Host;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, ThreadId};

static NEXT_THREAD_SEQ: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_SEQ: u64 = NEXT_THREAD_SEQ.fetch_add(1, Ordering::Relaxed);
}

/// Small, stable numeric id for the calling thread. `ThreadId` has no stable integer form.
#[must_use]
pub fn thread_seq() -> u64 {
    THREAD_SEQ.with(|seq| *seq)
}

/// Exactly one branch applies to any call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionContext {
    Main,
    Anonymous { id: u64 },
    Named { name: String, id: u64 },
}

impl ExecutionContext {
    /// Classifies the calling thread against the designated main thread.
    #[must_use]
    pub fn current(main: ThreadId) -> Self {
        let current = thread::current();
        if current.id() == main {
            return Self::Main;
        }
        let id = thread_seq();
        match current.name() {
            Some(name) if !name.is_empty() => Self::Named {
                name: name.to_string(),
                id,
            },
            _ => Self::Anonymous { id },
        }
    }

    /// Suffix appended to the rendered line.
    #[must_use]
    pub fn annotation(&self, host: &dyn Host) -> String {
        match self {
            Self::Main => format!(
                "(at Frame: {} sec: {:.3})",
                host.frame_count(),
                host.elapsed().as_secs_f64()
            ),
            Self::Anonymous { id } => format!("(from anonymous thread with id {id})"),
            Self::Named { name, id } => format!("(from thread {name} with id {id})"),
        }
    }
}
