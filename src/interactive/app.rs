//! TUI application state and logic

use super::keyboard::{KeyboardKey, KeyboardLayout};
use super::rendering::ScreenLayout;
use crate::game::{Event, GuessEngine, SessionStats};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long the "Invalid word." banner stays up
pub const INVALID_WORD_DISPLAY: Duration = Duration::from_millis(1500);

/// Redraw interval while waiting for input
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a, R: Rng = StdRng> {
    pub engine: GuessEngine<'a, R>,
    pub stats: SessionStats,
    pub should_quit: bool,
    invalid_word_at: Option<Instant>,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(engine: GuessEngine<'a, R>) -> Self {
        Self {
            engine,
            stats: SessionStats::default(),
            should_quit: false,
            invalid_word_at: None,
        }
    }

    /// Whether the invalid-word banner is showing at `now`
    #[must_use]
    pub fn invalid_word_visible(&self, now: Instant) -> bool {
        self.invalid_word_at
            .is_some_and(|shown| now.saturating_duration_since(shown) < INVALID_WORD_DISPLAY)
    }

    /// Drop the banner once its display time has passed
    pub fn tick(&mut self, now: Instant) {
        if !self.invalid_word_visible(now) {
            self.invalid_word_at = None;
        }
    }

    /// Start a new game, keeping session statistics
    pub fn new_game(&mut self) {
        self.engine.restart();
        self.invalid_word_at = None;
    }

    pub fn submit(&mut self, now: Instant) {
        for event in self.engine.submit() {
            match event {
                Event::InvalidWord => self.invalid_word_at = Some(now),
                Event::GameOver(outcome) => {
                    self.stats.record(&outcome);
                    self.invalid_word_at = None;
                }
                Event::LetterTyped { .. }
                | Event::LetterErased { .. }
                | Event::RowScored { .. } => {}
            }
        }
    }

    /// Apply an on-screen key press
    pub fn press(&mut self, key: KeyboardKey, now: Instant) {
        match key {
            KeyboardKey::Letter(c) => {
                self.engine.type_letter(c);
            }
            KeyboardKey::Back => {
                self.engine.back();
            }
            KeyboardKey::Enter => self.submit(now),
        }
    }

    /// Handle a physical key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if control => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            _ if self.engine.status().is_over() => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n' | 'N')) {
                    self.new_game();
                }
            }
            KeyCode::Char(c) if !control => self.press(KeyboardKey::Letter(c), now),
            KeyCode::Backspace => self.press(KeyboardKey::Back, now),
            KeyCode::Enter => self.press(KeyboardKey::Enter, now),
            _ => {}
        }
    }

    /// Handle a left click at `(column, row)` on a screen of size `area`
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect, now: Instant) {
        let layout = ScreenLayout::new(area);

        if self.engine.status().is_over() {
            let panel = layout.end_panel(area);
            if panel.contains((column, row).into()) {
                self.new_game();
            }
            return;
        }

        if let Some(key) = KeyboardLayout::new(layout.keyboard).key_at(column, row) {
            self.press(key, now);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(mouse.column, mouse.row, area, now);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI stopped: {err:#}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<SessionStats> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)? {
            let now = Instant::now();
            match event::read()? {
                TermEvent::Key(key) => app.handle_key(key, now),
                TermEvent::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height), now);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
