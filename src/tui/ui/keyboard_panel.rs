use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use dskey_core::Key;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

/// Terminal columns per key width unit
const COLS_PER_UNIT: f32 = 5.0;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Keyboard;
    let ctx = app.keyboard.context();

    let block = super::panel("KEYBOARD", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = app.layout();
    let mut lines = Vec::with_capacity(layout.rows().len());

    for (r, row) in layout.rows().iter().enumerate() {
        let mut spans = Vec::new();
        for (c, key) in row.iter().enumerate() {
            let selected = focused && app.selected == (r, c);
            let latched = *key == Key::Shift && ctx.is_shifted();
            let style = t.key_cap(!key.is_glyph(), latched, selected);

            let width = (key.width_units() * COLS_PER_UNIT) as usize;
            spans.push(Span::styled(pad_center(&key.label(ctx.is_caps_lock()), width), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}

fn pad_center(label: &str, width: usize) -> String {
    let len = label.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(total - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_center() {
        assert_eq!(pad_center("q", 5), "  q  ");
        assert_eq!(pad_center("space", 20).chars().count(), 20);
        assert_eq!(pad_center("return", 4), "return");
    }
}
