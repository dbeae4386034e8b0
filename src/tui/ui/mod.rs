mod footer;
mod header;
mod input_panel;
mod keyboard_panel;
mod output_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Compact header
            Constraint::Min(5),    // Input block
            Constraint::Min(5),    // Output block
            Constraint::Length(6), // On-screen keyboard (4 rows)
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    input_panel::render(frame, app, root[1]);
    output_panel::render(frame, app, root[2]);
    keyboard_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

/// Bordered panel block, thick when focused
fn panel(title: &str, focused: bool) -> Block<'_> {
    let t = theme();
    Block::default()
        .title(t.panel_title(title, focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
}
