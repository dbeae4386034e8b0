use ratatui::prelude::*;
use ratatui::widgets::*;

use dskey_core::transform::codepoint_label;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

const INSPECTOR_WIDTH: u16 = 18;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = super::panel("OUTPUT", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let output = app.output();

    let (text_area, inspector_area) = if app.show_codepoints {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(INSPECTOR_WIDTH)])
            .split(inner);
        (chunks[0], Some(chunks[1]))
    } else {
        (inner, None)
    };

    if output.is_empty() {
        let empty = Paragraph::new(Line::styled("No output yet.", t.text_muted()));
        frame.render_widget(empty, text_area);
    } else {
        let lines: Vec<Line> = output
            .split('\n')
            .map(|l| Line::styled(l.to_string(), t.output_text()))
            .collect();

        // Clamp scroll position
        let visible_height = text_area.height as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll = app.output_scroll.min(max_scroll);

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0));
        frame.render_widget(para, text_area);
    }

    if let Some(area) = inspector_area {
        render_inspector(frame, &output, area);
    }
}

/// Codepoints of the last characters of the output
fn render_inspector(frame: &mut Frame, output: &str, area: Rect) {
    let t = theme();
    let visible = area.height as usize;
    let chars: Vec<char> = output.chars().filter(|c| !c.is_control()).collect();
    let start = chars.len().saturating_sub(visible);

    let lines: Vec<Line> = chars[start..]
        .iter()
        .map(|&ch| {
            Line::from(vec![
                Span::styled(format!("{} ", ch), t.text_primary()),
                Span::styled(codepoint_label(ch), t.codepoint()),
            ])
        })
        .collect();

    let para = Paragraph::new(lines).block(Block::default().borders(Borders::LEFT));
    frame.render_widget(para, area);
}
