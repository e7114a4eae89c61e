use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::input::InputBuffer;
use crate::ui::Theme;

/// Render a single-line input with a vim-style cursor: `|` in insert mode,
/// a reversed block in normal mode, plain text when unfocused.
pub fn draw_input_field(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    buffer: &InputBuffer,
    focused: bool,
    insert: bool,
) {
    let content = buffer.content().to_string();
    let cursor_pos = buffer.cursor();

    if focused && insert {
        let before: String = content.chars().take(cursor_pos).collect();
        let after: String = content.chars().skip(cursor_pos).collect();

        let line = Line::from(vec![
            Span::styled(before, theme.style()),
            Span::styled("|", theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, theme.style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    } else if focused {
        let mut spans: Vec<Span> = content
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let style = if i == cursor_pos {
                    theme.style().add_modifier(Modifier::REVERSED)
                } else {
                    theme.style()
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        if cursor_pos >= content.chars().count() {
            spans.push(Span::styled(" ", theme.style().add_modifier(Modifier::REVERSED)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    } else {
        let display = if content.is_empty() { "(empty)".to_string() } else { content };
        frame.render_widget(Paragraph::new(display).style(theme.muted_style()), area);
    }
}
