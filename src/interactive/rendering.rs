//! TUI rendering with ratatui
//!
//! Draws the board, the hint keyboard, the invalid-word banner and the
//! end-of-game panel from the engine's state.

use super::app::App;
use super::keyboard::{KeyboardKey, KeyboardLayout};
use crate::core::Mark;
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::{KEY, mark_rgb, outcome_message};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 5;
const TILE_GAP: u16 = 1;
const BOARD_WIDTH: u16 = 5 * TILE_WIDTH + 4 * TILE_GAP + 2;
const BOARD_HEIGHT: u16 = MAX_ATTEMPTS as u16 * 2 - 1 + 2;
const PANEL_WIDTH: u16 = 58;
const PANEL_HEIGHT: u16 = 6;

const INVALID_RED: Color = Color::Rgb(0xaa, 0x00, 0x00);

/// Screen regions for a terminal area
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub banner: Rect,
    pub board: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                      // Header
                Constraint::Length(1),                      // Invalid-word banner
                Constraint::Length(BOARD_HEIGHT),           // Board
                Constraint::Length(1),                      // Spacer
                Constraint::Length(KeyboardLayout::HEIGHT), // Keyboard
                Constraint::Min(0),                         // Filler
                Constraint::Length(1),                      // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            banner: chunks[1],
            board: centered_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
            keyboard: chunks[4],
            status: chunks[6],
        }
    }

    /// Area of the end-of-game panel, drawn over the board
    #[must_use]
    pub fn end_panel(&self, area: Rect) -> Rect {
        let mut panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
        panel.y = self.board.y + self.board.height.saturating_sub(PANEL_HEIGHT) / 2;
        panel
    }
}

/// `width` x `height` rectangle centered in `area`, clamped to it
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>, now: Instant) {
    let area = f.area();
    let layout = ScreenLayout::new(area);

    render_header(f, layout.header);
    if app.invalid_word_visible(now) {
        render_banner(f, layout.banner);
    }
    render_board(f, app, layout.board);
    render_keyboard(f, app, layout.keyboard);
    render_status(f, app, layout.status);

    if app.engine.outcome().is_some() {
        render_end_panel(f, app, layout.end_panel(area));
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(Color::Gray)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, area: Rect) {
    let text = " Invalid word. ";
    let banner = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(INVALID_RED)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(banner, centered_rect(area, text.len() as u16, 1));
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = app.engine.state();
    for row in 0..MAX_ATTEMPTS {
        let y = inner.y + row as u16 * 2;
        if y >= inner.bottom() {
            break;
        }
        let feedback = state.history().get(row).map(|record| record.feedback);

        for col in 0..5 {
            let x = inner.x + col as u16 * (TILE_WIDTH + TILE_GAP);
            let tile = Rect::new(x, y, TILE_WIDTH, 1).intersection(inner);
            if tile.is_empty() {
                continue;
            }

            let letter = state.cell(row, col);
            let style = match (feedback, letter) {
                (Some(feedback), _) => Style::default()
                    .fg(Color::White)
                    .bg(rgb(mark_rgb(feedback.mark_at(col))))
                    .add_modifier(Modifier::BOLD),
                (None, Some(_)) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                (None, None) => Style::default().fg(Color::DarkGray),
            };
            let text =
                letter.map_or_else(|| "·".to_string(), |c| c.to_ascii_uppercase().to_string());

            f.render_widget(
                Paragraph::new(text)
                    .style(style)
                    .alignment(Alignment::Center),
                tile,
            );
        }
    }
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let hints = app.engine.state().hints();

    for &(key, rect) in KeyboardLayout::new(area).keys() {
        let hint = match key {
            KeyboardKey::Letter(c) => hints.get(c),
            KeyboardKey::Enter | KeyboardKey::Back => None,
        };
        let style = match hint {
            Some(mark) => Style::default().fg(Color::White).bg(rgb(mark_rgb(mark))),
            None => Style::default().fg(Color::Black).bg(rgb(KEY)),
        }
        .add_modifier(Modifier::BOLD);

        f.render_widget(
            Paragraph::new(key.label())
                .style(style)
                .alignment(Alignment::Center),
            rect,
        );
    }
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let stats = &app.stats;
    let status = Line::from(vec![
        Span::raw(format!(
            " Games: {} | Win Rate: {:.0}% | Streak: {} (max {}) ",
            stats.games_played,
            stats.win_rate(),
            stats.current_streak,
            stats.max_streak
        )),
        Span::styled(
            "│ Enter: Submit | Backspace: Erase | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), area);
}

fn render_end_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let Some(outcome) = app.engine.outcome() else {
        return;
    };
    let won = outcome.is_win();
    let accent = if won {
        rgb(mark_rgb(Mark::Correct))
    } else {
        Color::Red
    };

    let content = vec![
        Line::from(outcome_message(&outcome.secret, outcome.attempts, won)),
        Line::from(""),
        Line::from(Span::styled(
            " New Wordle ",
            Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter or click to play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(if won { " 🎉 Solved " } else { " Game Over " })
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(accent)),
        );

    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}
