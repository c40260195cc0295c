//! On-screen keyboard geometry
//!
//! Shared by rendering (where to draw each key) and mouse handling (which key
//! was clicked), so both always agree.

use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::layout::{Position, Rect};

const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const GAP: u16 = 1;
const ROW_SPACING: u16 = 2;

/// A clickable key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKey {
    Letter(char),
    Enter,
    Back,
}

impl KeyboardKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Back => "BACK".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Enter | Self::Back => WIDE_KEY_WIDTH,
        }
    }
}

/// Keys and their screen rectangles for a given area
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    keys: Vec<(KeyboardKey, Rect)>,
}

impl KeyboardLayout {
    /// Rows needed to draw the keyboard
    pub const HEIGHT: u16 = ROW_SPACING * 2 + 1;

    /// Lay the keyboard out centered in `area`
    ///
    /// Keys that do not fit are left out.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let mut keys = Vec::with_capacity(28);

        for (i, row) in rows().iter().enumerate() {
            let y = area.y + i as u16 * ROW_SPACING;
            if y >= area.bottom() {
                break;
            }

            let row_width: u16 =
                row.iter().map(|key| key.width()).sum::<u16>() + GAP * (row.len() as u16 - 1);
            let mut x = area.x + area.width.saturating_sub(row_width) / 2;

            for &key in row {
                let rect = Rect::new(x, y, key.width(), 1);
                if rect.right() <= area.right() {
                    keys.push((key, rect));
                }
                x += key.width() + GAP;
            }
        }

        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[(KeyboardKey, Rect)] {
        &self.keys
    }

    /// Key under the terminal cell `(column, row)`
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<KeyboardKey> {
        let position = Position::new(column, row);
        self.keys
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|&(key, _)| key)
    }
}

fn rows() -> [Vec<KeyboardKey>; 3] {
    let letters = |row: &str| row.chars().map(KeyboardKey::Letter).collect::<Vec<_>>();

    let mut bottom = vec![KeyboardKey::Enter];
    bottom.extend(letters(KEYBOARD_ROWS[2]));
    bottom.push(KeyboardKey::Back);

    [letters(KEYBOARD_ROWS[0]), letters(KEYBOARD_ROWS[1]), bottom]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> KeyboardLayout {
        KeyboardLayout::new(Rect::new(0, 0, 80, KeyboardLayout::HEIGHT))
    }

    #[test]
    fn all_keys_fit_in_wide_area() {
        assert_eq!(layout().keys().len(), 26 + 2);
    }

    #[test]
    fn top_row_is_centered() {
        // 10 keys * 5 + 9 gaps = 59 columns, offset (80 - 59) / 2 = 10
        let layout = layout();
        assert_eq!(layout.key_at(10, 0), Some(KeyboardKey::Letter('q')));
        assert_eq!(layout.key_at(14, 0), Some(KeyboardKey::Letter('q')));
        assert_eq!(layout.key_at(15, 0), None);
        assert_eq!(layout.key_at(16, 0), Some(KeyboardKey::Letter('w')));
        assert_eq!(layout.key_at(9, 0), None);
    }

    #[test]
    fn rows_are_spaced() {
        let layout = layout();
        assert_eq!(layout.key_at(13, 1), None);
        assert_eq!(layout.key_at(13, 2), Some(KeyboardKey::Letter('a')));
    }

    #[test]
    fn bottom_row_has_enter_and_back() {
        // 7 + 7 * 5 + 7 + 8 gaps = 57 columns, offset 11
        let layout = layout();
        assert_eq!(layout.key_at(11, 4), Some(KeyboardKey::Enter));
        assert_eq!(layout.key_at(19, 4), Some(KeyboardKey::Letter('z')));
        assert_eq!(layout.key_at(67, 4), Some(KeyboardKey::Back));
        assert_eq!(layout.key_at(68, 4), None);
    }

    #[test]
    fn narrow_area_drops_keys() {
        let layout = KeyboardLayout::new(Rect::new(0, 0, 30, 1));
        assert!(layout.keys().len() < 10);
        for (_, rect) in layout.keys() {
            assert!(rect.right() <= 30 && rect.y == 0);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(KeyboardKey::Letter('q').label(), "Q");
        assert_eq!(KeyboardKey::Enter.label(), "ENTER");
        assert_eq!(KeyboardKey::Back.label(), "BACK");
    }
}
