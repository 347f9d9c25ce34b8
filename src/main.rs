//! Rolodex - main entry point.
//!
//! Wires configuration, logging, and the context together, then hands
//! stdin and stdout to the command loop.

use anyhow::Result;
use rolodex::repl::{self, Context};
use rolodex::Config;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first: LOG_LEVEL shapes the fallback filter below.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout a pure reply channel)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Starting contact book session");

    let mut ctx = Context::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut ctx, stdin.lock(), &mut stdout.lock())?;

    info!("Session complete");
    Ok(())
}
