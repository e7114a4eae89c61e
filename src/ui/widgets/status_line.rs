use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::input::InputMode;
use crate::ui::Theme;

/// Dynamic status bar hints, recomputed after every state change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    /// Left side hint text (e.g., "i: edit  j/k: fields")
    pub left_hint: String,
    /// Right side hint text (e.g., "Enter: next")
    pub right_hint: String,
}

impl StatusBarState {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left_hint: left.to_string(),
            right_hint: right.to_string(),
        }
    }

    pub fn command_mode() -> Self {
        Self::new("", "Enter: run  Esc: cancel")
    }

    pub fn executing() -> Self {
        Self::new("Please wait...", "")
    }
}

/// Mode indicator and command buffer on the left, progress and hints on the right
pub fn draw_status_line(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    mode: InputMode,
    command: &str,
    hints: &StatusBarState,
    progress: Option<String>,
) {
    frame.render_widget(Clear, area);

    let mode_name = mode.display_name();
    let mode_span = Span::styled(format!(" {mode_name} "), theme.mode_style(mode));

    let after_mode = if mode == InputMode::Command {
        Span::styled(format!(":{command}"), theme.style())
    } else {
        Span::styled(hints.left_hint.clone(), theme.muted_style())
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![mode_span, Span::raw(" "), after_mode])),
        Rect::new(area.x, area.y, area.width * 2 / 3, 1),
    );

    let right_text = match (progress, hints.right_hint.is_empty()) {
        (Some(p), true) => p,
        (Some(p), false) => format!("{p}  {}", hints.right_hint),
        (None, _) => hints.right_hint.clone(),
    };

    frame.render_widget(
        Paragraph::new(right_text)
            .style(theme.muted_style())
            .alignment(Alignment::Right),
        Rect::new(area.x + area.width / 3, area.y, area.width * 2 / 3, 1),
    );
}
