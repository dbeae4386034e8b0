// Dskey Keyboard Mode
// Which key page is on screen: letters, numbers or symbols

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Active key page of the on-screen keyboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardMode {
    #[default]
    Letters,
    Numbers,
    Symbols,
}

impl KeyboardMode {
    /// Label of the key that switches to this mode
    pub fn switch_label(self) -> &'static str {
        match self {
            KeyboardMode::Letters => "ABC",
            KeyboardMode::Numbers => "123",
            KeyboardMode::Symbols => "#+=",
        }
    }
}
