mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text_muted)
        };
        Line::styled(format!(" {} ", title), style)
    }

    /// Header badge, lit when the state is on
    pub fn badge(&self, on: bool) -> Style {
        if on {
            Style::default()
                .fg(Color::Black)
                .bg(self.palette.accent_success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text_muted)
        }
    }

    /// Key cap style: glyph vs control key, latched (shift held), selection
    pub fn key_cap(&self, control: bool, latched: bool, selected: bool) -> Style {
        if selected {
            return Style::default()
                .fg(self.palette.selection_fg)
                .bg(self.palette.selection_bg)
                .add_modifier(Modifier::BOLD);
        }
        let bg = if latched {
            self.palette.key_latched_bg
        } else if control {
            self.palette.key_control_bg
        } else {
            self.palette.key_bg
        };
        Style::default().fg(self.palette.text_primary).bg(bg)
    }

    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Double-struck output text
    pub fn output_text(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn codepoint(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    pub fn error_message(&self) -> Style {
        Style::default().fg(self.palette.accent_danger)
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
