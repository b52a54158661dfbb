//! Render model construction.
//!
//! Converts classified rows plus a timestamp into the display-ready
//! structure consumed by the TUI. Pure: no I/O, no clock reads.

use chrono::{DateTime, Local};

use super::classifier::MonitoredProcessRow;

/// Fixed dashboard title.
pub const TITLE: &str = "Claude Process Monitor";

/// Static footer help line.
pub const HELP_TEXT: &str = "Press Ctrl+C to quit  •  Updates every second";

/// Everything one render frame needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub title: &'static str,
    /// `YYYY-MM-DD HH:MM:SS`, local time.
    pub timestamp: String,
    pub rows: Vec<MonitoredProcessRow>,
    /// Matched-process count for the footer.
    pub total: usize,
}

/// Build the view model for one frame.
pub fn build_view(rows: Vec<MonitoredProcessRow>, now: DateTime<Local>) -> RenderModel {
    RenderModel {
        title: TITLE,
        timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        total: rows.len(),
        rows,
    }
}
