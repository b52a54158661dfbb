//! Claude process monitor command handler.
//!
//! Runs the real-time process dashboard in a TUI.

use anyhow::{Context, Result};

use crate::ui::monitor_tui::run_monitor_app;

/// Refresh cadence of the dashboard, in milliseconds.
const REFRESH_INTERVAL_MS: u64 = 1000;

/// Execute the monitor command
pub fn execute() -> Result<()> {
    run_monitor_app(REFRESH_INTERVAL_MS).context("Failed to run process monitor")
}
