use std::path::{Path, PathBuf};

use ps_monitor::core::process_monitor::{classify, ProcessRecord};

const NOW: u64 = 1_700_000_000;
const HOME: &str = "/home/user";

fn record(pid: u32, parent_pid: Option<u32>, name: &str, cmd: &[&str]) -> ProcessRecord {
    ProcessRecord {
        pid,
        parent_pid,
        name: name.to_string(),
        cmd: cmd.iter().map(|arg| arg.to_string()).collect(),
        start_time_secs: NOW - 90,
        cwd: Some(PathBuf::from("/home/user/work")),
        cpu_usage_percent: 0.0,
    }
}

fn home() -> Option<&'static Path> {
    Some(Path::new(HOME))
}

#[test]
fn test_rows_only_for_matching_records() {
    let records = vec![
        record(100, Some(1), "claude", &["/usr/local/bin/claude"]),
        record(200, Some(1), "zsh", &["-zsh"]),
        record(300, Some(1), "vim", &["vim", "claude-notes.md"]),
    ];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pid, 100);
}

#[test]
fn test_opus_invocation_included_with_label() {
    let records = vec![record(
        42,
        Some(1),
        "claude",
        &["/usr/bin/claude", "--model", "claude-3-opus-20240229"],
    )];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].args_summary, "opus-3");
}

#[test]
fn test_sonnet_and_continue_labels_join_in_order() {
    let records = vec![record(
        42,
        Some(1),
        "claude",
        &[
            "/usr/bin/claude",
            "--model",
            "claude-3-5-sonnet-20241022",
            "--continue",
        ],
    )];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows[0].args_summary, "sonnet-3.5, continue");
}

#[test]
fn test_no_recognized_flags_is_none() {
    let records = vec![record(
        42,
        Some(1),
        "claude",
        &["/usr/bin/claude", "chat", "--verbose"],
    )];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows[0].args_summary, "none");
}

#[test]
fn test_monitor_marker_excludes_regardless_of_match() {
    // Would match the target rule, but carries the monitor's own marker
    let records = vec![
        record(
            42,
            Some(1),
            "claude",
            &["/usr/bin/claude", "--continue", "ps-monitor-session"],
        ),
        record(43, Some(1), "ps-monitor", &["/usr/bin/ps-monitor"]),
    ];

    let rows = classify(&records, NOW, home());

    assert!(rows.is_empty());
}

#[test]
fn test_unreadable_cwd_still_produces_row() {
    let mut rec = record(42, Some(1), "claude", &["/usr/bin/claude"]);
    rec.cwd = None;

    let rows = classify(&[rec], NOW, home());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].working_dir, "unknown");
}

#[test]
fn test_parent_name_resolved_from_full_snapshot() {
    // The parent is not itself a matched record
    let records = vec![
        record(1000, Some(500), "claude", &["/usr/bin/claude"]),
        record(500, Some(1), "zsh", &["-zsh"]),
    ];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows[0].parent_pid, 500);
    assert_eq!(rows[0].parent_name, "zsh");
}

#[test]
fn test_missing_parent_is_unknown() {
    let records = vec![record(1000, Some(999), "claude", &["/usr/bin/claude"])];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows[0].parent_name, "unknown");
}

#[test]
fn test_absent_parent_pid_renders_as_zero() {
    let records = vec![record(1000, None, "claude", &["/usr/bin/claude"])];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows[0].parent_pid, 0);
    assert_eq!(rows[0].parent_name, "unknown");
}

#[test]
fn test_parent_with_unreadable_cmdline_still_names_itself() {
    // Access-denied command line leaves an empty argv; the record never
    // classifies but still resolves as a parent.
    let mut parent = record(500, Some(1), "launchd", &[]);
    parent.cwd = None;

    let records = vec![
        parent,
        record(1000, Some(500), "claude", &["/usr/bin/claude"]),
    ];

    let rows = classify(&records, NOW, home());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].parent_name, "launchd");
}

#[test]
fn test_runtime_truncated_to_whole_seconds() {
    let mut rec = record(42, Some(1), "claude", &["/usr/bin/claude"]);
    rec.start_time_secs = NOW - 3661;

    let rows = classify(&[rec], NOW, home());

    assert_eq!(rows[0].runtime, "1:01:01");
}

#[test]
fn test_home_directory_collapsing() {
    let mut at_home = record(1, Some(1), "claude", &["/usr/bin/claude"]);
    at_home.cwd = Some(PathBuf::from(HOME));

    let mut nested = record(2, Some(1), "claude", &["/usr/bin/claude"]);
    nested.cwd = Some(PathBuf::from("/home/user/projects/demo"));

    let mut elsewhere = record(3, Some(1), "claude", &["/usr/bin/claude"]);
    elsewhere.cwd = Some(PathBuf::from("/var/log"));

    let rows = classify(&[at_home, nested, elsewhere], NOW, home());

    assert_eq!(rows[0].working_dir, "~");
    assert_eq!(rows[1].working_dir, "~/projects/demo");
    assert_eq!(rows[2].working_dir, "/var/log");
}

#[test]
fn test_empty_snapshot_yields_no_rows() {
    let rows = classify(&[], NOW, home());
    assert!(rows.is_empty());
}
