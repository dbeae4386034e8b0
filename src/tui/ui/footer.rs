use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane, StatusKind};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let status_style = match app.status_kind {
        StatusKind::Error => t.error_message(),
        StatusKind::Info => t.status_message(),
    };
    let line1 = Line::styled(format!("Status: {}", app.status), status_style);

    let pane_hint = match app.focused_pane {
        Pane::Input => "type:edit  Enter:newline  ",
        Pane::Keyboard => "arrows:select  Enter:press  ",
        Pane::Output => "up/down:scroll  ",
    };

    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":pane  ", t.text_muted()),
        Span::styled(pane_hint, t.text_muted()),
        Span::styled("F2", t.key_hint()),
        Span::styled(":codepoints  ", t.text_muted()),
        Span::styled("F3", t.key_hint()),
        Span::styled(":graphemes  ", t.text_muted()),
        Span::styled("^S", t.key_hint()),
        Span::styled(":save  ", t.text_muted()),
        Span::styled("^L", t.key_hint()),
        Span::styled(":clear  ", t.text_muted()),
        Span::styled("Esc", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}
