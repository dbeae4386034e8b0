// Dskey Core Library
// Double-struck text transform and on-screen keyboard model

pub mod context;
pub mod document;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod mode;
pub mod transform;

#[cfg(feature = "settings")]
pub mod settings;

pub use context::KeyboardContext;
pub use document::{TextBuffer, TextDocument};
pub use key::{Key, KeyParseError};
pub use keyboard::{KeyOutcome, Keyboard, KeyboardError};
pub use layout::Layout;
pub use mode::KeyboardMode;
pub use transform::{map, map_char, map_graphemes, DoubleStruck, Transform};

#[cfg(feature = "settings")]
pub use settings::{Settings, SettingsError};
