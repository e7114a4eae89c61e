use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::{Message, Theme};

/// Draw the 3-line message panel. When there is no message but a call is in
/// flight, `working` is shown as an info message instead.
pub fn draw_message_panel(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    message: Option<&Message>,
    working: Option<&str>,
) {
    let (text, is_error) = match (message, working) {
        (Some(m), _) => (m.text.as_str(), m.is_error),
        (None, Some(w)) => (w, false),
        (None, None) => return,
    };

    let (title, border_style, text_style) = if is_error {
        (" Error ", theme.error_style(), theme.error_style())
    } else {
        (" Info ", theme.secondary_style(), theme.style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    let mut spans = vec![Span::styled(text, text_style)];
    if message.is_some() {
        spans.push(Span::styled(" (press any key to dismiss)", theme.muted_style()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
