//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logs go to stderr so
//! they never interleave with replies.

use anyhow::{Context, Result};
use contact_book::{Assistant, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins; otherwise fall back to LOG_LEVEL from the config
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday horizon: {} days",
        config.birthday_horizon_days
    );

    let prompt = config.prompt.clone();
    let mut assistant = Assistant::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    writeln!(stdout, "Welcome to the assistant bot!")?;
    loop {
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input, shutting down");
            break;
        };
        let line = line.context("Failed to read command from stdin")?;

        let reply = assistant.handle_line(&line);
        writeln!(stdout, "{}", reply.text())?;
        if reply.is_exit() {
            break;
        }
    }

    info!("Assistant shutdown complete");
    Ok(())
}
