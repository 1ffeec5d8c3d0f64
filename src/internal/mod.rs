//! The crate's own diagnostics: sink lifecycle and write failures.
//!
//! A logger cannot report on itself through itself without recursing, so these
//! go out as `tracing` events. Nothing is printed unless the host installs a subscriber.

/// Lifecycle events: directory created, file opened.
pub fn debug(scope: &str, msg: &str) {
    tracing::debug!(target: "gamedebug", scope, "{msg}");
}

/// Degraded but working: file output disabled for the rest of the run.
pub fn warn(scope: &str, msg: &str) {
    tracing::warn!(target: "gamedebug", scope, "{msg}");
}

/// Failures that are also returned to the caller.
pub fn error(scope: &str, msg: &str) {
    tracing::error!(target: "gamedebug", scope, "{msg}");
}
