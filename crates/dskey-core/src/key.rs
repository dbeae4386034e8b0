// Dskey Key Type
// One key of the on-screen keyboard

use std::fmt;
use std::str::FromStr;

/// A key on the on-screen keyboard.
///
/// Glyph keys carry the character they show; control keys carry nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letter key, inserted in double-struck form
    Letter(char),
    /// Digit key, inserted in double-struck form
    Number(char),
    /// Punctuation or symbol key, inserted literally
    Symbol(char),
    Backspace,
    Space,
    Return,
    Shift,
    /// "123" page switch
    NumberMode,
    /// "#+=" page switch
    SymbolMode,
    /// "ABC" page switch
    LetterMode,
}

/// Errors from parsing a key token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key token")]
    Empty,

    #[error("unknown key name: {0}")]
    UnknownName(String),
}

impl Key {
    /// The glyph carried by letter, number and symbol keys
    pub fn glyph(self) -> Option<char> {
        match self {
            Key::Letter(c) | Key::Number(c) | Key::Symbol(c) => Some(c),
            _ => None,
        }
    }

    /// True for keys that insert their own glyph
    pub fn is_glyph(self) -> bool {
        self.glyph().is_some()
    }

    /// True for the three page-switch keys
    pub fn is_mode_switch(self) -> bool {
        matches!(self, Key::NumberMode | Key::SymbolMode | Key::LetterMode)
    }

    /// On-screen label given the current shift state
    pub fn label(self, caps_lock: bool) -> String {
        match self {
            Key::Letter(c) | Key::Number(c) | Key::Symbol(c) => c.to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Space => "space".to_string(),
            Key::Return => "return".to_string(),
            Key::Shift => if caps_lock { "⇪" } else { "⇧" }.to_string(),
            Key::NumberMode => "123".to_string(),
            Key::SymbolMode => "#+=".to_string(),
            Key::LetterMode => "ABC".to_string(),
        }
    }

    /// Width relative to a glyph key
    pub fn width_units(self) -> f32 {
        match self {
            Key::Shift | Key::Backspace => 1.5,
            Key::Space => 4.0,
            Key::Return => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) | Key::Number(c) | Key::Symbol(c) => write!(f, "{}", c),
            Key::Backspace => write!(f, "backspace"),
            Key::Space => write!(f, "space"),
            Key::Return => write!(f, "return"),
            Key::Shift => write!(f, "shift"),
            Key::NumberMode => write!(f, "123"),
            Key::SymbolMode => write!(f, "#+="),
            Key::LetterMode => write!(f, "abc"),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parse a key token.
    ///
    /// Single characters become glyph keys; longer tokens are key names
    /// (case-insensitive). `123` and `#+=` are names, not symbol runs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(KeyParseError::Empty)?;
        if chars.next().is_none() {
            return Ok(match first {
                c if c.is_ascii_alphabetic() => Key::Letter(c),
                c if c.is_ascii_digit() => Key::Number(c),
                c => Key::Symbol(c),
            });
        }

        match s.to_ascii_lowercase().as_str() {
            "shift" => Ok(Key::Shift),
            "space" => Ok(Key::Space),
            "backspace" | "bksp" => Ok(Key::Backspace),
            "return" | "enter" => Ok(Key::Return),
            "123" | "numbers" => Ok(Key::NumberMode),
            "#+=" | "symbols" => Ok(Key::SymbolMode),
            "abc" | "letters" => Ok(Key::LetterMode),
            _ => Err(KeyParseError::UnknownName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glyph_keys() {
        assert_eq!("q".parse::<Key>(), Ok(Key::Letter('q')));
        assert_eq!("Q".parse::<Key>(), Ok(Key::Letter('Q')));
        assert_eq!("7".parse::<Key>(), Ok(Key::Number('7')));
        assert_eq!("€".parse::<Key>(), Ok(Key::Symbol('€')));
        assert_eq!("\"".parse::<Key>(), Ok(Key::Symbol('"')));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("Shift".parse::<Key>(), Ok(Key::Shift));
        assert_eq!("ENTER".parse::<Key>(), Ok(Key::Return));
        assert_eq!("bksp".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("123".parse::<Key>(), Ok(Key::NumberMode));
        assert_eq!("#+=".parse::<Key>(), Ok(Key::SymbolMode));
        assert_eq!("abc".parse::<Key>(), Ok(Key::LetterMode));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Key>(), Err(KeyParseError::Empty));
        assert_eq!(
            "hyper".parse::<Key>(),
            Err(KeyParseError::UnknownName("hyper".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        let keys = [
            Key::Letter('a'),
            Key::Number('0'),
            Key::Symbol('#'),
            Key::Backspace,
            Key::Space,
            Key::Return,
            Key::Shift,
            Key::NumberMode,
            Key::SymbolMode,
            Key::LetterMode,
        ];
        for key in keys {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Shift.label(false), "⇧");
        assert_eq!(Key::Shift.label(true), "⇪");
        assert_eq!(Key::Backspace.label(false), "⌫");
        assert_eq!(Key::SymbolMode.label(false), "#+=");
        assert_eq!(Key::Letter('k').label(false), "k");
    }

    #[test]
    fn test_widths() {
        assert_eq!(Key::Space.width_units(), 4.0);
        assert_eq!(Key::Return.width_units(), 2.0);
        assert_eq!(Key::Shift.width_units(), 1.5);
        assert_eq!(Key::Letter('a').width_units(), 1.0);
    }
}
