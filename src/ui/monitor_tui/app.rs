use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::process_monitor::{build_view, classify, RenderModel, SnapshotSource};

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Monitor application state
pub struct MonitorApp {
    pub view: RenderModel,
    pub source: SnapshotSource,
    pub should_quit: bool,
    pub interval_ms: u64,
}

impl MonitorApp {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            view: build_view(Vec::new(), Local::now()),
            source: SnapshotSource::new(),
            should_quit: false,
            interval_ms,
        }
    }

    /// Capture a fresh snapshot and rebuild the view.
    pub fn refresh(&mut self) -> Result<()> {
        let now = Local::now();
        let records = self
            .source
            .capture()
            .context("Failed to capture process snapshot")?;

        let home = dirs::home_dir();
        let rows = classify(&records, now.timestamp().max(0) as u64, home.as_deref());

        log::debug!("{} of {} processes matched", rows.len(), records.len());

        self.view = build_view(rows, now);
        Ok(())
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::None => {}
        }
    }
}

/// Run the monitor TUI application
pub fn run_monitor_app(interval_ms: u64) -> Result<()> {
    // Interrupt flag flipped by the signal handler, observed once per
    // loop iteration. In raw mode Ctrl+C also arrives as a key event.
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::Relaxed);
        })
        .context("Failed to set Ctrl+C handler")?;
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = MonitorApp::new(interval_ms);

    // Throwaway scan: the first CPU sample per process always reads 0,
    // so establish the baseline before the first real tick.
    app.source.warm_up();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    let result = run_loop(&mut terminal, &mut app, &interrupted);

    // Restore terminal on both exit paths before reporting anything
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    if result.is_ok() {
        println!("{}", "Exiting...".dimmed());
    }

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut MonitorApp,
    interrupted: &AtomicBool,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.interval_ms);

    app.refresh()?;
    let mut last_tick = Instant::now();

    loop {
        // Full-frame redraw; ratatui overwrites the previous frame
        terminal.draw(|frame| render_ui(frame, app))?;

        // Wait for input up to the remainder of the tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let monitor_event = match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            MonitorEvent::Quit
                        }
                        KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
                        _ => MonitorEvent::None,
                    };
                    app.handle_event(monitor_event);
                }
            }
        }

        if interrupted.load(Ordering::Relaxed) {
            app.should_quit = true;
        }

        if app.should_quit {
            break;
        }

        // Refresh on tick
        if last_tick.elapsed() >= tick_rate {
            app.refresh()?;
            last_tick = Instant::now();
        }
    }

    Ok(())
}
