// Dskey Settings Module
// User-configurable keyboard and output settings

#![cfg(feature = "settings")]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::context::{KeyboardContext, DEFAULT_DOUBLE_TAP};
use crate::transform::DoubleStruck;
use crate::KeyboardMode;

/// Accepted range for the shift double-tap window, in milliseconds
pub const DOUBLE_TAP_RANGE_MS: std::ops::RangeInclusive<u64> = 50..=2000;

/// Settings loaded from a TOML file (default: ~/.config/dskey/settings.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    keyboard: KeyboardSettings,

    #[serde(default)]
    output: OutputSettings,

    /// Path to the settings file (for reload)
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyboardSettings {
    #[serde(default = "default_double_tap_ms")]
    double_tap_ms: u64,

    #[serde(default)]
    initial_mode: KeyboardMode,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            double_tap_ms: default_double_tap_ms(),
            initial_mode: KeyboardMode::Letters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSettings {
    #[serde(default)]
    graphemes: bool,

    #[serde(default)]
    codepoints: bool,
}

fn default_double_tap_ms() -> u64 {
    DEFAULT_DOUBLE_TAP.as_millis() as u64
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            keyboard: KeyboardSettings::default(),
            output: OutputSettings::default(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let ms = self.keyboard.double_tap_ms;
        if !DOUBLE_TAP_RANGE_MS.contains(&ms) {
            return Err(SettingsError::InvalidValue(format!(
                "keyboard.double_tap_ms = {} (expected {}..={})",
                ms,
                DOUBLE_TAP_RANGE_MS.start(),
                DOUBLE_TAP_RANGE_MS.end()
            )));
        }
        Ok(())
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dskey").join("settings.toml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("no settings file, using defaults");
        Ok(Self::new())
    }

    /// Write settings as TOML through a temp file and rename
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| SettingsError::InvalidValue(e.to_string()))?;
        let temp = path.with_extension("toml.tmp");
        fs::write(&temp, rendered)?;
        fs::rename(&temp, path)?;
        Ok(())
    }

    /// Reload settings from the file they were loaded from
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        let path = self
            .source_path
            .clone()
            .ok_or_else(|| SettingsError::InvalidValue("No source path set".to_string()))?;
        *self = Self::from_file(path)?;
        Ok(())
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn double_tap(&self) -> Duration {
        Duration::from_millis(self.keyboard.double_tap_ms)
    }

    pub fn initial_mode(&self) -> KeyboardMode {
        self.keyboard.initial_mode
    }

    pub fn graphemes(&self) -> bool {
        self.output.graphemes
    }

    pub fn set_graphemes(&mut self, value: bool) {
        self.output.graphemes = value;
    }

    pub fn codepoints(&self) -> bool {
        self.output.codepoints
    }

    pub fn set_codepoints(&mut self, value: bool) {
        self.output.codepoints = value;
    }

    /// Keyboard context configured from these settings
    pub fn keyboard_context(&self) -> KeyboardContext {
        KeyboardContext::new(self.double_tap()).with_mode(self.initial_mode())
    }

    /// Transform configured from these settings
    pub fn transform(&self) -> DoubleStruck {
        DoubleStruck::with_graphemes(self.output.graphemes)
    }
}

/// Default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# dskey settings
# Place this file at: ~/.config/dskey/settings.toml

[keyboard]
# Two shift taps within this many milliseconds toggle caps lock (50..=2000)
double_tap_ms = 300
# Page shown at start: "letters", "numbers" or "symbols"
initial_mode = "letters"

[output]
# Map by grapheme cluster; letters carrying combining marks stay unchanged
graphemes = false
# Print one "char<TAB>U+XXXX" line per output character (CLI)
codepoints = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.double_tap(), Duration::from_millis(300));
        assert_eq!(settings.initial_mode(), KeyboardMode::Letters);
        assert!(!settings.graphemes());
        assert!(!settings.codepoints());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[keyboard]
double_tap_ms = 450
initial_mode = "symbols"

[output]
graphemes = true
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.double_tap(), Duration::from_millis(450));
        assert_eq!(settings.initial_mode(), KeyboardMode::Symbols);
        assert!(settings.graphemes());
        assert!(!settings.codepoints());
        assert_eq!(settings.keyboard_context().mode(), KeyboardMode::Symbols);
        assert!(settings.transform().graphemes());
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::new());
    }

    #[test]
    fn test_double_tap_out_of_range() {
        let err = Settings::from_toml("[keyboard]\ndouble_tap_ms = 5\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Settings::from_toml("[keyboard]\ninitial_mode = \"emoji\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::TomlParse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Settings::from_toml("[output]\ncolour = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::TomlParse(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::new();
        settings.set_codepoints(true);
        settings.save_to(&path).unwrap();

        let mut loaded = Settings::from_file(&path).unwrap();
        assert!(loaded.codepoints());
        assert_eq!(loaded.source_path(), Some(path.as_path()));

        Settings::new().save_to(&path).unwrap();
        loaded.reload().unwrap();
        assert!(!loaded.codepoints());
    }

    #[test]
    fn test_reload_without_path() {
        let mut settings = Settings::new();
        assert!(matches!(
            settings.reload(),
            Err(SettingsError::InvalidValue(_))
        ));
    }
}
