use std::io;
use thiserror::Error;

/// Custom error type for the ps-monitor application
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Process snapshot error: {0}")]
    Snapshot(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for the ps-monitor application
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a snapshot error
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        MonitorError::Snapshot(msg.into())
    }

    /// Create a TUI error
    pub fn tui<S: Into<String>>(msg: S) -> Self {
        MonitorError::Tui(msg.into())
    }
}
