use ratatui::prelude::*;

/// Catppuccin Mocha inspired color palette for the TUI
pub struct Palette {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_danger: Color,

    // UI colors
    pub border_default: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Key caps
    pub key_bg: Color,
    pub key_control_bg: Color,
    pub key_latched_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // Text - Catppuccin text shades
            text_primary: Color::Rgb(205, 214, 244),      // Text
            text_secondary: Color::Rgb(186, 194, 222),    // Subtext1
            text_muted: Color::Rgb(108, 112, 134),        // Overlay0

            // Accents
            accent_primary: Color::Rgb(137, 180, 250),    // Blue
            accent_success: Color::Rgb(166, 227, 161),    // Green
            accent_warning: Color::Rgb(249, 226, 175),    // Yellow
            accent_danger: Color::Rgb(243, 139, 168),     // Red

            // UI
            border_default: Color::Rgb(69, 71, 90),       // Surface1
            border_focused: Color::Rgb(137, 180, 250),    // Blue
            selection_bg: Color::Rgb(137, 180, 250),      // Blue
            selection_fg: Color::Rgb(30, 30, 46),         // Crust

            // Key caps
            key_bg: Color::Rgb(49, 50, 68),               // Surface0
            key_control_bg: Color::Rgb(69, 71, 90),       // Surface1
            key_latched_bg: Color::Rgb(203, 166, 247),    // Mauve
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }
}
