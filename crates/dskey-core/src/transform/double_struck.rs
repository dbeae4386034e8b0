//! Double-struck ("blackboard bold") character mapping.
//!
//! Latin letters and ASCII digits are replaced by their codepoints in the
//! Mathematical Alphanumeric Symbols block:
//!
//! | Input  | Output                          |
//! |--------|---------------------------------|
//! | `A-Z`  | `U+1D538 + (ch - 'A')`          |
//! | `a-z`  | `U+1D552 + (ch - 'a')`          |
//! | `0-9`  | `U+1D7D8 + (ch - '0')`          |
//!
//! Seven capitals were encoded in Letterlike Symbols long before the math
//! block existed (ℂ ℍ ℕ ℙ ℚ ℝ ℤ). Their slots in the math block are
//! reserved and unassigned, so they are mapped through an exception table
//! that is consulted before the linear rule. Everything else passes through.
//!
//! ```
//! use dskey_core::transform::map;
//!
//! assert_eq!(map("Hello World 123"), "ℍ𝕖𝕝𝕝𝕠 𝕎𝕠𝕣𝕝𝕕 𝟙𝟚𝟛");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::Transform;

/// First codepoint of MATHEMATICAL DOUBLE-STRUCK CAPITAL A..Z
pub const BASE_UPPER: u32 = 0x1D538;
/// First codepoint of MATHEMATICAL DOUBLE-STRUCK SMALL A..Z
pub const BASE_LOWER: u32 = 0x1D552;
/// First codepoint of MATHEMATICAL DOUBLE-STRUCK DIGIT ZERO..NINE
pub const BASE_DIGIT: u32 = 0x1D7D8;

/// Uppercase letters that map to legacy Letterlike Symbols codepoints.
pub const EXCEPTIONS: [(char, char); 7] = [
    ('C', '\u{2102}'), // ℂ
    ('H', '\u{210D}'), // ℍ
    ('N', '\u{2115}'), // ℕ
    ('P', '\u{2119}'), // ℙ
    ('Q', '\u{211A}'), // ℚ
    ('R', '\u{211D}'), // ℝ
    ('Z', '\u{2124}'), // ℤ
];

/// Which mapping rule applies to a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// One of `C H N P Q R Z`, mapped through [`EXCEPTIONS`]
    Exception(char),
    /// Uppercase ASCII letter outside the exception table
    Upper,
    /// Lowercase ASCII letter
    Lower,
    /// ASCII digit
    Digit,
    /// Anything else, left unchanged
    Other,
}

fn exception_for(ch: char) -> Option<char> {
    EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

/// Classify a character by the mapping rule that applies to it.
///
/// The exception table takes priority over the uppercase range.
pub fn classify(ch: char) -> CharClass {
    if let Some(legacy) = exception_for(ch) {
        return CharClass::Exception(legacy);
    }
    match ch {
        'A'..='Z' => CharClass::Upper,
        'a'..='z' => CharClass::Lower,
        '0'..='9' => CharClass::Digit,
        _ => CharClass::Other,
    }
}

/// True for ASCII letters and digits
pub fn is_mappable(ch: char) -> bool {
    !matches!(classify(ch), CharClass::Other)
}

fn offset_from(base: u32, ch: char, first: char) -> Option<char> {
    char::from_u32(base + (ch as u32 - first as u32))
}

/// Map a single character to its double-struck form.
pub fn map_char(ch: char) -> char {
    let mapped = match classify(ch) {
        CharClass::Exception(legacy) => Some(legacy),
        CharClass::Upper => offset_from(BASE_UPPER, ch, 'A'),
        CharClass::Lower => offset_from(BASE_LOWER, ch, 'a'),
        CharClass::Digit => offset_from(BASE_DIGIT, ch, '0'),
        CharClass::Other => None,
    };
    mapped.unwrap_or(ch)
}

/// Map every character of `input`, preserving order and character count.
pub fn map(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 4);
    map_into(input, &mut out);
    out
}

/// Append the mapped form of `input` to `out`.
pub fn map_into(input: &str, out: &mut String) {
    out.extend(input.chars().map(map_char));
}

/// Map by user-perceived character.
///
/// A grapheme cluster is mapped only when it is a single mappable scalar.
/// Clusters carrying combining marks (`e` + U+0301) or joined sequences are
/// left as they are, so accents never end up attached to a math letter.
pub fn map_graphemes(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 4);
    for cluster in input.graphemes(true) {
        let mut chars = cluster.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => out.push(map_char(ch)),
            _ => out.push_str(cluster),
        }
    }
    out
}

/// Format a character as `U+XXXX` (at least four uppercase hex digits).
pub fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// The double-struck mapping as a [`Transform`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleStruck {
    graphemes: bool,
}

impl DoubleStruck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use grapheme-aware mapping for whole strings
    pub fn with_graphemes(graphemes: bool) -> Self {
        Self { graphemes }
    }

    pub fn graphemes(&self) -> bool {
        self.graphemes
    }
}

impl Transform for DoubleStruck {
    fn apply(&self, input: &str) -> String {
        if self.graphemes {
            map_graphemes(input)
        } else {
            map(input)
        }
    }

    fn apply_char(&self, ch: char) -> char {
        map_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('A'), CharClass::Upper);
        assert_eq!(classify('C'), CharClass::Exception('ℂ'));
        assert_eq!(classify('c'), CharClass::Lower);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify(' '), CharClass::Other);
        assert_eq!(classify('é'), CharClass::Other);
    }

    #[test]
    fn test_map_char_bases() {
        assert_eq!(map_char('A') as u32, BASE_UPPER);
        assert_eq!(map_char('a') as u32, BASE_LOWER);
        assert_eq!(map_char('0') as u32, BASE_DIGIT);
        assert_eq!(map_char('z') as u32, BASE_LOWER + 25);
        assert_eq!(map_char('9') as u32, BASE_DIGIT + 9);
    }

    #[test]
    fn test_exceptions_override_linear_rule() {
        for (from, to) in EXCEPTIONS {
            let linear = BASE_UPPER + (from as u32 - 'A' as u32);
            assert_eq!(map_char(from), to);
            assert_ne!(map_char(from) as u32, linear);
        }
    }

    #[test]
    fn test_map_into_appends() {
        let mut out = String::from("> ");
        map_into("ab", &mut out);
        assert_eq!(out, "> 𝕒𝕓");
    }

    #[test]
    fn test_map_graphemes_keeps_combining_clusters() {
        let input = "e\u{301}x";
        assert_eq!(map_graphemes(input), "e\u{301}𝕩");
        // Per-char mapping splits the cluster apart
        assert_eq!(map(input), "𝕖\u{301}𝕩");
    }

    #[test]
    fn test_map_graphemes_crlf_is_one_cluster() {
        assert_eq!(map_graphemes("a\r\nb"), "𝕒\r\n𝕓");
    }

    #[test]
    fn test_codepoint_label() {
        assert_eq!(codepoint_label('A'), "U+0041");
        assert_eq!(codepoint_label('ℤ'), "U+2124");
        assert_eq!(codepoint_label('𝔸'), "U+1D538");
    }

    #[test]
    fn test_transform_trait() {
        let plain = DoubleStruck::new();
        let clustered = DoubleStruck::with_graphemes(true);
        assert_eq!(plain.apply("Q1"), "ℚ𝟙");
        assert_eq!(plain.apply_char('q'), '𝕢');
        assert_eq!(clustered.apply("a\u{308}b"), "a\u{308}𝕓");
        assert!(clustered.graphemes());
    }
}
