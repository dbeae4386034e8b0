// Dskey Layout
// Key rows for each keyboard mode

use crate::{Key, KeyboardMode};

const TOP_LETTERS: &str = "qwertyuiop";
const MIDDLE_LETTERS: &str = "asdfghjkl";
const BOTTOM_LETTERS: &str = "zxcvbnm";

const DIGITS: &str = "1234567890";
const NUMBER_SYMBOLS: &str = "-/:;()$&@\"";
const TOP_SYMBOLS: &str = "[]{}#%^*+=";
const MIDDLE_SYMBOLS: &str = "_\\|~<>€£¥•";
const PUNCTUATION: &str = ".,?!'";

/// Rows of keys shown for one mode and shift state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    mode: KeyboardMode,
    rows: Vec<Vec<Key>>,
}

fn letters(row: &str, shifted: bool) -> impl Iterator<Item = Key> + '_ {
    row.chars().map(move |c| {
        Key::Letter(if shifted { c.to_ascii_uppercase() } else { c })
    })
}

fn glyphs(row: &str, make: fn(char) -> Key) -> impl Iterator<Item = Key> + '_ {
    row.chars().map(make)
}

fn bottom_row(switch: Key) -> Vec<Key> {
    vec![switch, Key::Space, Key::Return]
}

impl Layout {
    /// Build the layout for `mode`. Letters are uppercase when `shifted`.
    pub fn for_mode(mode: KeyboardMode, shifted: bool) -> Self {
        let rows = match mode {
            KeyboardMode::Letters => {
                let mut third = vec![Key::Shift];
                third.extend(letters(BOTTOM_LETTERS, shifted));
                third.push(Key::Backspace);
                vec![
                    letters(TOP_LETTERS, shifted).collect(),
                    letters(MIDDLE_LETTERS, shifted).collect(),
                    third,
                    bottom_row(Key::NumberMode),
                ]
            }
            KeyboardMode::Numbers => vec![
                glyphs(DIGITS, Key::Number).collect(),
                glyphs(NUMBER_SYMBOLS, Key::Symbol).collect(),
                punctuation_row(Key::SymbolMode),
                bottom_row(Key::LetterMode),
            ],
            KeyboardMode::Symbols => vec![
                glyphs(TOP_SYMBOLS, Key::Symbol).collect(),
                glyphs(MIDDLE_SYMBOLS, Key::Symbol).collect(),
                punctuation_row(Key::NumberMode),
                bottom_row(Key::LetterMode),
            ],
        };
        Self { mode, rows }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    /// All keys, row by row
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flatten()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Key> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Row and column of `key`, if present
    pub fn position(&self, key: &Key) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|k| k == key).map(|c| (r, c))
        })
    }

    /// Total width of a row in glyph-key units
    pub fn row_width(&self, row: usize) -> f32 {
        self.rows
            .get(row)
            .map(|r| r.iter().map(|k| k.width_units()).sum())
            .unwrap_or(0.0)
    }
}

fn punctuation_row(switch: Key) -> Vec<Key> {
    let mut row = vec![switch];
    row.extend(glyphs(PUNCTUATION, Key::Symbol));
    row.push(Key::Backspace);
    row
}
