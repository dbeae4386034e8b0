use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let ctx = app.keyboard.context();

    let line = Line::from(vec![
        Span::styled("𝔻𝕊 Keyboard ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}] ", ctx.mode()), t.text_secondary()),
        Span::styled(" SHIFT ", t.badge(ctx.is_shifted())),
        Span::raw(" "),
        Span::styled(" CAPS ", t.badge(ctx.is_caps_lock())),
        Span::raw(" "),
        Span::styled(" GRAPHEMES ", t.badge(app.graphemes())),
        Span::raw("  "),
        Span::styled("Esc:quit", t.key_hint()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left);
    frame.render_widget(header, area);
}
