//! Terminal session and event loop for the chart views.
//!
//! [`App`] owns the theme and drives a blocking loop that redraws one
//! [`GraphData`] until the user dismisses it.

use std::io;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use inflammation_core::graph::GraphData;

use crate::chart_view;
use crate::themes::Theme;

/// Footer text shown under every chart.
pub const QUIT_HINT: &str = "Press q or Esc to continue";

/// Whether `key` should dismiss the current chart.
///
/// Accepts `q`, `Q`, `Esc` and `Ctrl+C`; key-release events are ignored.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Application state for the chart TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct an application using the theme called `theme_name`.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            should_quit: false,
        }
    }

    /// Show `graph` full-screen and block until a quit key is pressed.
    ///
    /// The terminal is restored before returning, including when entering
    /// the alternate screen or drawing fails part-way.
    pub fn run_chart(&mut self, graph: &GraphData) -> io::Result<()> {
        debug!(title = %graph.title, series = graph.len(), "opening chart view");

        let guard = TerminalGuard::enter()?;
        let result = self.event_loop(graph);
        let restored = guard.restore();

        result.and(restored)
    }

    fn event_loop(&mut self, graph: &GraphData) -> io::Result<()> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.should_quit = false;
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| {
                let area = frame.area();
                chart_view::render_graph(frame, area, graph, QUIT_HINT, &self.theme);
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.should_quit = is_quit_key(&key);
                }
            }
        }

        Ok(())
    }
}

// ── Terminal guard ────────────────────────────────────────────────────────────

/// Raw mode plus alternate screen, undone on [`restore`](Self::restore) or
/// on drop, whichever comes first.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the next step so a failure below still restores.
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    let leave_screen = || execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    let steps: [&dyn Fn() -> io::Result<()>; 2] = [&disable_raw_mode, &leave_screen];
    run_all(&steps)
}

/// Run every step in order, even after one fails, and return the first error.
fn run_all(steps: &[&dyn Fn() -> io::Result<()>]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step() {
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}

// ── Tests ─────────────────────────────────────────────────────────────────────
