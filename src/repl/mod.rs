//! The read-dispatch-print loop.
//!
//! One command per input line, one reply per output line. The loop is
//! generic over its reader and writer so whole sessions can be driven from
//! tests; `main` hands it locked stdin and stdout.

pub mod dispatcher;
pub mod handlers;

pub use dispatcher::{dispatch, UNKNOWN_COMMAND};
pub use handlers::{Context, FAREWELL, GREETING};

use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the loop until a farewell reply or end of input.
///
/// Replies are flushed after every line so the program behaves under a
/// pipe. Only I/O errors propagate; user input never ends the loop early.
pub fn run<R, W>(ctx: &mut Context, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let reply = dispatch(ctx, &line);

        writeln!(output, "{}", reply)?;
        output.flush()?;

        // Exact match only: a reply merely containing the farewell text
        // must not stop the session.
        if reply == FAREWELL {
            break;
        }
    }

    ctx.metrics.log_summary();
    debug!("session ended");
    Ok(())
}
