// Dskey Keyboard
// Key press dispatch into a text document

use std::time::{Duration, Instant};

use crate::context::KeyboardContext;
use crate::document::TextDocument;
use crate::key::KeyParseError;
use crate::layout::Layout;
use crate::transform::{DoubleStruck, Transform};
use crate::{Key, KeyboardMode};

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Inserted(String),
    Deleted,
    ShiftChanged { shifted: bool, caps_lock: bool },
    ModeChanged(KeyboardMode),
}

/// Key press errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyboardError {
    #[error("key '{key}' is not on the {mode} layout")]
    NotOnLayout { key: Key, mode: KeyboardMode },

    #[error("no key produces {0:?}")]
    Untypeable(char),

    #[error(transparent)]
    Parse(#[from] KeyParseError),
}

/// On-screen keyboard: state plus the transform applied to glyph keys.
///
/// Letter and number keys go through the transform; symbol keys are
/// inserted literally.
#[derive(Debug, Clone)]
pub struct Keyboard<T = DoubleStruck> {
    context: KeyboardContext,
    transform: T,
}

impl Default for Keyboard<DoubleStruck> {
    fn default() -> Self {
        Self::new(KeyboardContext::default())
    }
}

impl Keyboard<DoubleStruck> {
    pub fn new(context: KeyboardContext) -> Self {
        Self::with_transform(context, DoubleStruck::new())
    }
}

impl<T: Transform> Keyboard<T> {
    pub fn with_transform(context: KeyboardContext, transform: T) -> Self {
        Self { context, transform }
    }

    pub fn context(&self) -> &KeyboardContext {
        &self.context
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Layout for the current mode and shift state
    pub fn layout(&self) -> Layout {
        Layout::for_mode(self.context.mode(), self.context.is_shifted())
    }

    /// Give letter keys the case currently shown on screen
    pub fn resolve(&self, key: Key) -> Key {
        match key {
            Key::Letter(c) if self.context.is_shifted() => Key::Letter(c.to_ascii_uppercase()),
            Key::Letter(c) => Key::Letter(c.to_ascii_lowercase()),
            other => other,
        }
    }

    /// Press a key now
    pub fn press<D: TextDocument + ?Sized>(
        &mut self,
        key: Key,
        doc: &mut D,
    ) -> Result<KeyOutcome, KeyboardError> {
        self.press_at(key, doc, Instant::now())
    }

    /// Press a key at `now`; `now` only matters for shift double taps
    pub fn press_at<D: TextDocument + ?Sized>(
        &mut self,
        key: Key,
        doc: &mut D,
        now: Instant,
    ) -> Result<KeyOutcome, KeyboardError> {
        let mode = self.context.mode();
        if !self.layout().contains(&key) {
            return Err(KeyboardError::NotOnLayout { key, mode });
        }

        let outcome = match key {
            Key::Letter(c) => {
                let text = self.insert_mapped(c, doc);
                self.context.after_letter();
                KeyOutcome::Inserted(text)
            }
            Key::Number(c) => KeyOutcome::Inserted(self.insert_mapped(c, doc)),
            Key::Symbol(c) => {
                let text = c.to_string();
                doc.insert_text(&text);
                KeyOutcome::Inserted(text)
            }
            Key::Backspace => {
                doc.delete_backward();
                KeyOutcome::Deleted
            }
            Key::Space => insert_literal(" ", doc),
            Key::Return => insert_literal("\n", doc),
            Key::Shift => {
                self.context.handle_shift_at(now);
                KeyOutcome::ShiftChanged {
                    shifted: self.context.is_shifted(),
                    caps_lock: self.context.is_caps_lock(),
                }
            }
            Key::NumberMode => self.switch_mode(KeyboardMode::Numbers),
            Key::SymbolMode => self.switch_mode(KeyboardMode::Symbols),
            Key::LetterMode => self.switch_mode(KeyboardMode::Letters),
        };

        log::debug!("key {} ({}) -> {:?}", key, mode, outcome);
        Ok(outcome)
    }

    /// Press whitespace-separated key tokens, e.g. `"shift h i space 123 1"`.
    ///
    /// Letter tokens follow the on-screen case, so `h` after `shift` types `H`.
    pub fn press_all<D: TextDocument + ?Sized>(
        &mut self,
        tokens: &str,
        doc: &mut D,
    ) -> Result<Vec<KeyOutcome>, KeyboardError> {
        let mut outcomes = Vec::new();
        for token in tokens.split_whitespace() {
            let key = self.resolve(token.parse::<Key>()?);
            outcomes.push(self.press(key, doc)?);
        }
        Ok(outcomes)
    }

    /// Type `text` the way a user would, switching pages and shift as needed.
    ///
    /// Shift taps are spaced beyond the double-tap window so a capital never
    /// turns into caps lock. The clock starts after the last recorded shift
    /// tap, which may lie ahead of `Instant::now()` after an earlier call.
    pub fn type_text<D: TextDocument + ?Sized>(
        &mut self,
        text: &str,
        doc: &mut D,
    ) -> Result<(), KeyboardError> {
        let step = self.context.double_tap() + Duration::from_millis(1);
        let mut clock = match self.context.last_shift_tap() {
            Some(last) => Instant::now().max(last + step),
            None => Instant::now(),
        };

        for ch in text.chars() {
            match ch {
                ' ' => {
                    self.press_at(Key::Space, doc, clock)?;
                }
                '\n' => {
                    self.press_at(Key::Return, doc, clock)?;
                }
                c if c.is_ascii_alphabetic() => {
                    self.switch_to(KeyboardMode::Letters, doc, clock)?;
                    let upper = c.is_ascii_uppercase();
                    if self.context.is_caps_lock() && !upper {
                        clock += step;
                        self.press_at(Key::Shift, doc, clock)?;
                        self.press_at(Key::Shift, doc, clock + Duration::from_millis(1))?;
                    } else if self.context.is_shifted() != upper {
                        clock += step;
                        self.press_at(Key::Shift, doc, clock)?;
                    }
                    self.press_at(Key::Letter(c), doc, clock)?;
                }
                c if c.is_ascii_digit() => {
                    self.switch_to(KeyboardMode::Numbers, doc, clock)?;
                    self.press_at(Key::Number(c), doc, clock)?;
                }
                c => {
                    let symbol = Key::Symbol(c);
                    let mode = [KeyboardMode::Numbers, KeyboardMode::Symbols]
                        .into_iter()
                        .find(|m| Layout::for_mode(*m, false).contains(&symbol))
                        .ok_or(KeyboardError::Untypeable(c))?;
                    self.switch_to(mode, doc, clock)?;
                    self.press_at(symbol, doc, clock)?;
                }
            }
        }
        Ok(())
    }

    fn switch_to<D: TextDocument + ?Sized>(
        &mut self,
        target: KeyboardMode,
        doc: &mut D,
        now: Instant,
    ) -> Result<(), KeyboardError> {
        while self.context.mode() != target {
            let key = match (self.context.mode(), target) {
                (_, KeyboardMode::Letters) => Key::LetterMode,
                (_, KeyboardMode::Numbers) => Key::NumberMode,
                (KeyboardMode::Letters, KeyboardMode::Symbols) => Key::NumberMode,
                (_, KeyboardMode::Symbols) => Key::SymbolMode,
            };
            self.press_at(key, doc, now)?;
        }
        Ok(())
    }

    fn insert_mapped<D: TextDocument + ?Sized>(&self, glyph: char, doc: &mut D) -> String {
        let mut buf = [0u8; 4];
        let text = self.transform.apply(glyph.encode_utf8(&mut buf));
        doc.insert_text(&text);
        text
    }

    fn switch_mode(&mut self, mode: KeyboardMode) -> KeyOutcome {
        self.context.set_mode(mode);
        KeyOutcome::ModeChanged(mode)
    }
}

fn insert_literal<D: TextDocument + ?Sized>(text: &str, doc: &mut D) -> KeyOutcome {
    doc.insert_text(text);
    KeyOutcome::Inserted(text.to_string())
}
