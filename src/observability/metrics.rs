//! Session command counters.
//!
//! This module tracks what the command loop has processed. Counters are
//! reported through `tracing`, never printed to stdout.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct CommandMetrics {
    dispatched_total: Arc<AtomicU64>,
    errors_total: Arc<AtomicU64>,
    unknown_total: Arc<AtomicU64>,
}

impl CommandMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a dispatched command.
    pub fn track_command(&self, command: &str, ok: bool) {
        self.dispatched_total.fetch_add(1, Ordering::Relaxed);

        if !ok {
            self.errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(command = %command, ok = ok, "command dispatched");
    }

    /// Track a line that matched no command key.
    pub fn track_unknown(&self) {
        self.dispatched_total.fetch_add(1, Ordering::Relaxed);
        self.unknown_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!("unrecognized command");
    }

    /// Total lines dispatched, recognized or not.
    pub fn dispatched_total(&self) -> u64 {
        self.dispatched_total.load(Ordering::Relaxed)
    }

    /// Recognized commands whose handler returned an error.
    pub fn errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    /// Lines that matched no command key.
    pub fn unknown_total(&self) -> u64 {
        self.unknown_total.load(Ordering::Relaxed)
    }

    /// Log a one-line session summary at debug level.
    pub fn log_summary(&self) {
        tracing::debug!(
            dispatched = self.dispatched_total(),
            errors = self.errors_total(),
            unknown = self.unknown_total(),
            "session command totals"
        );
    }
}
