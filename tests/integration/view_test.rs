use chrono::{Local, TimeZone};

use ps_monitor::core::process_monitor::{build_view, MonitoredProcessRow, HELP_TEXT, TITLE};

fn sample_rows() -> Vec<MonitoredProcessRow> {
    vec![
        MonitoredProcessRow {
            pid: 4242,
            parent_pid: 100,
            parent_name: "zsh".to_string(),
            runtime: "0:12:07".to_string(),
            working_dir: "~/projects/demo".to_string(),
            args_summary: "sonnet-3.5, continue".to_string(),
        },
        MonitoredProcessRow {
            pid: 4243,
            parent_pid: 0,
            parent_name: "unknown".to_string(),
            runtime: "2:00:41".to_string(),
            working_dir: "unknown".to_string(),
            args_summary: "none".to_string(),
        },
    ]
}

#[test]
fn test_build_view_is_idempotent() {
    let now = Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap();

    let first = build_view(sample_rows(), now);
    let second = build_view(sample_rows(), now);

    assert_eq!(first, second);
}

#[test]
fn test_view_carries_rows_and_count() {
    let now = Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap();

    let view = build_view(sample_rows(), now);

    assert_eq!(view.title, TITLE);
    assert_eq!(view.timestamp, "2025-06-01 12:30:45");
    assert_eq!(view.total, 2);
    assert_eq!(view.rows[0].pid, 4242);
    assert_eq!(view.rows[1].args_summary, "none");
}

#[test]
fn test_help_text_names_quit_key_and_cadence() {
    assert!(HELP_TEXT.contains("Ctrl+C"));
    assert!(HELP_TEXT.contains("every second"));
}
