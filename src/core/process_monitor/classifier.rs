//! Classification and command-line parsing.
//!
//! Pure functions over the captured snapshot: deciding which processes are
//! Claude CLI invocations, summarizing their flags and resolving display
//! fields. Callers supply the clock and the home directory so everything
//! here stays testable without OS access.

use std::collections::HashMap;
use std::path::Path;

use super::snapshot::ProcessRecord;

/// Binary name the monitor looks for in process command lines.
pub const TARGET_BINARY: &str = "claude";

/// Marker identifying the monitor's own process; never displayed.
const SELF_MARKER: &str = "ps-monitor";

/// One display-ready row per matched process, rebuilt every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredProcessRow {
    pub pid: u32,
    /// 0 when the parent is unknown.
    pub parent_pid: u32,
    /// `"unknown"` when the parent has exited or cannot be read.
    pub parent_name: String,
    /// Elapsed time since process start, formatted `H:MM:SS`.
    pub runtime: String,
    /// Working directory with a leading home prefix collapsed to `~`,
    /// or `"unknown"`.
    pub working_dir: String,
    /// Comma-joined flag labels, or `"none"`.
    pub args_summary: String,
}

/// Filter a snapshot down to Claude CLI processes and build their rows.
///
/// A record matches when at least one argument identifies the target
/// binary (see [`TARGET_BINARY`]) and no argument contains the monitor's
/// own marker. Parent names are resolved against the whole snapshot, not
/// only matched records. Row order follows the snapshot enumeration
/// order; stability across ticks is not guaranteed.
pub fn classify(
    records: &[ProcessRecord],
    now_epoch_secs: u64,
    home: Option<&Path>,
) -> Vec<MonitoredProcessRow> {
    // pid -> record map for parent lookups
    let by_pid: HashMap<u32, &ProcessRecord> =
        records.iter().map(|record| (record.pid, record)).collect();

    records
        .iter()
        .filter(|record| is_target_invocation(&record.cmd) && !is_self_monitor(&record.cmd))
        .map(|record| {
            let parent_pid = record.parent_pid.unwrap_or(0);

            MonitoredProcessRow {
                pid: record.pid,
                parent_pid,
                parent_name: resolve_parent_name(parent_pid, &by_pid),
                runtime: format_runtime(now_epoch_secs.saturating_sub(record.start_time_secs)),
                working_dir: collapse_home(record.cwd.as_deref(), home),
                args_summary: args_summary(&record.cmd),
            }
        })
        .collect()
}

/// True when at least one argument is an invocation of the target binary.
///
/// The plain substring check alone would match unrelated arguments that
/// merely mention the name (a file path containing the word), so the
/// argument must also be path-qualified or the bare name.
fn is_target_invocation(cmd: &[String]) -> bool {
    cmd.iter().any(|arg| {
        arg.contains(TARGET_BINARY)
            && (arg.contains("bin/claude") || arg == TARGET_BINARY || arg.ends_with("/claude"))
    })
}

/// True when any argument contains the monitor's own marker.
fn is_self_monitor(cmd: &[String]) -> bool {
    cmd.iter().any(|arg| arg.contains(SELF_MARKER))
}

/// Index of the argument treated as the binary invocation: the first one
/// containing the target name that is not a flag.
fn binary_index(cmd: &[String]) -> Option<usize> {
    cmd.iter()
        .position(|arg| arg.contains(TARGET_BINARY) && !arg.starts_with('-'))
}

/// Summarize recognized flags after the binary invocation.
fn args_summary(cmd: &[String]) -> String {
    let labels = match binary_index(cmd) {
        Some(index) => flag_labels(&cmd[index + 1..]),
        None => Vec::new(),
    };

    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

/// Scan the remaining arguments in order, producing one label per
/// recognized flag. Unrecognized arguments are ignored.
fn flag_labels(remaining: &[String]) -> Vec<String> {
    let mut labels = Vec::new();

    for (i, arg) in remaining.iter().enumerate() {
        match arg.as_str() {
            "--model" | "-m" => {
                if let Some(model) = remaining.get(i + 1) {
                    labels.push(model_label(model));
                }
            }
            "--continue" => labels.push("continue".to_string()),
            "--no-images" => labels.push("no-images".to_string()),
            "--profile" => labels.push("profile".to_string()),
            _ => {}
        }
    }

    labels
}

/// Shorten known model identifiers for display; pass anything else
/// through verbatim as `model:<value>`.
fn model_label(model: &str) -> String {
    if model.contains("claude-3-5-sonnet") {
        "sonnet-3.5".to_string()
    } else if model.contains("claude-3-5-haiku") {
        "haiku-3.5".to_string()
    } else if model.contains("claude-3-opus") {
        "opus-3".to_string()
    } else {
        format!("model:{}", model)
    }
}

fn resolve_parent_name(parent_pid: u32, by_pid: &HashMap<u32, &ProcessRecord>) -> String {
    if parent_pid == 0 {
        return "unknown".to_string();
    }

    by_pid
        .get(&parent_pid)
        .map(|record| record.name.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format an elapsed duration as `H:MM:SS`, whole seconds only. Hours are
/// unbounded and not zero-padded.
pub fn format_runtime(elapsed_secs: u64) -> String {
    let hours = elapsed_secs / 3600;
    let minutes = (elapsed_secs % 3600) / 60;
    let seconds = elapsed_secs % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Collapse a leading home-directory prefix to `~`. Unrelated paths pass
/// through verbatim; a missing working directory becomes `"unknown"`.
pub fn collapse_home(cwd: Option<&Path>, home: Option<&Path>) -> String {
    let Some(cwd) = cwd else {
        return "unknown".to_string();
    };

    if let Some(home) = home {
        if let Ok(rest) = cwd.strip_prefix(home) {
            return if rest.as_os_str().is_empty() {
                "~".to_string()
            } else {
                format!("~/{}", rest.display())
            };
        }
    }

    cwd.display().to_string()
}
