// src/signal.rs

//! Provides Ctrl+C handling for the console adapter.

use anyhow::{Context, Result};

/// Exit code used when the user interrupts a run.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Sets up a handler for Ctrl+C (SIGINT).
///
/// There is nothing to roll back: the handler reports the cancellation and
/// exits, leaving the tree in whatever state the last completed operation
/// produced.
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler() -> Result<()> {
    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, stopping.");
        eprintln!("\n{}", crate::errors::Error::Interrupted);
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(())
}

// Note: Testing signal handlers directly is complex and often skipped
// or handled via integration tests that send signals to the process.
