//! Line dispatch.
//!
//! A fixed, ordered table maps command keys to handlers. The incoming line
//! is lower-cased, and the first key that is a literal prefix of it wins:
//! `addendum 1 2` runs the `add` handler. That quirk is long-standing
//! behavior that existing sessions rely on, so it is kept; mind the table
//! order when adding keys whose prefixes overlap.

use super::handlers::{self, Context};
use crate::error::CommandError;
use tracing::debug;

/// Reply for a line that matches no table entry.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

type Handler = fn(&mut Context, &str) -> Result<String, CommandError>;

/// Command table, in match-priority order.
const HANDLERS: &[(&str, Handler)] = &[
    ("hello", handlers::hello),
    ("add", handlers::add),
    ("change", handlers::change),
    ("phone", handlers::phone),
    ("show all", handlers::show_all),
    ("good bye", handlers::farewell),
    ("close", handlers::farewell),
    ("exit", handlers::farewell),
];

/// Dispatch one input line and render the reply.
///
/// This is the error boundary: every [`CommandError`] a handler returns is
/// rendered to its single-line Display text here, so malformed input can
/// never abort the session.
pub fn dispatch(ctx: &mut Context, line: &str) -> String {
    let line = line.to_lowercase();

    for (key, handler) in HANDLERS {
        if line.starts_with(key) {
            let result = handler(ctx, &line);
            ctx.metrics.track_command(key, result.is_ok());

            return match result {
                Ok(reply) => reply,
                Err(err) => {
                    debug!(command = %key, error = %err, "command failed");
                    err.to_string()
                }
            };
        }
    }

    ctx.metrics.track_unknown();
    UNKNOWN_COMMAND.to_string()
}
