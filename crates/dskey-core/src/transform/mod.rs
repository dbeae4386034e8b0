// Dskey Transform Module
// Character mapping from ASCII letters/digits to double-struck codepoints

pub mod double_struck;

pub use double_struck::{
    classify, codepoint_label, is_mappable, map, map_char, map_graphemes, map_into, CharClass,
    DoubleStruck,
};

/// A text transform applied to key output and preview text.
///
/// Implementations must be pure: the same input always yields the same
/// output, and no state is carried between calls.
pub trait Transform: Send + Sync {
    /// Transform a whole string
    fn apply(&self, input: &str) -> String;

    /// Transform a single character
    fn apply_char(&self, ch: char) -> char;
}
