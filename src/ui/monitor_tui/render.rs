use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::core::process_monitor::HELP_TEXT;

use super::app::MonitorApp;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Process table
            Constraint::Length(4), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_process_table(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let view = &app.view;

    let line = Line::from(vec![
        Span::styled(view.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            view.timestamp.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(line).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(header, area);
}

fn render_process_table(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(vec![
        Cell::from("PID").style(header_style),
        Cell::from("PPID").style(header_style),
        Cell::from("PARENT").style(header_style),
        Cell::from("TIME").style(header_style),
        Cell::from("WORKING DIRECTORY").style(header_style),
        Cell::from("ARGS").style(header_style),
    ])
    .height(1);

    let rows: Vec<Row> = app
        .view
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.pid.to_string()),
                Cell::from(row.parent_pid.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.parent_name.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.runtime.clone()),
                Cell::from(row.working_dir.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.args_summary.clone()).style(Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
    )
    .header(header);

    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Total Claude processes: "),
            Span::styled(
                app.view.total.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            HELP_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let para = Paragraph::new(lines).centered();
    frame.render_widget(para, area);
}
