//! Claude process monitoring core functionality.
//!
//! This module provides the business logic for enumerating OS processes,
//! filtering them to Claude CLI invocations and shaping the result for
//! display. No terminal I/O happens here.

mod classifier;
mod snapshot;
mod view;

pub use classifier::{classify, collapse_home, format_runtime, MonitoredProcessRow, TARGET_BINARY};
pub use snapshot::{ProcessRecord, SnapshotSource};
pub use view::{build_view, RenderModel, HELP_TEXT, TITLE};
