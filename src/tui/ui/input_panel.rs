use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Input;

    let block = super::panel("INPUT", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "Type here, or press keys on the on-screen keyboard.",
            t.text_muted(),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    let mut text = app.input.text().to_string();
    if focused {
        text.push('▏');
    }
    let lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::styled(l.to_string(), t.text_primary()))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
