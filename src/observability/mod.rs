//! Observability module for monitoring the command loop.
//!
//! Diagnostics go through `tracing` to stderr so stdout stays a pure
//! command-reply channel.

pub mod metrics;

pub use metrics::CommandMetrics;
