use ratatui::{prelude::*, widgets::Paragraph};

use crate::getstarted::{GetStartedApp, PanelFocus};
use crate::input::InputMode;
use crate::ui::widgets::draw_input_field;

pub fn draw(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    if area.height < 4 || area.width < 30 {
        return;
    }

    let is_focused = app.panel_focus == PanelFocus::Content;
    let width = area.width.saturating_sub(4);
    let mut y = area.y;

    frame.render_widget(
        Paragraph::new("Username").style(if is_focused {
            app.theme.primary_style()
        } else {
            app.theme.style()
        }),
        Rect::new(area.x + 2, y, 12, 1),
    );

    match app.created_user() {
        Some(user) => {
            frame.render_widget(
                Paragraph::new(user.username.as_str()).style(app.theme.secondary_style()),
                Rect::new(area.x + 14, y, width.saturating_sub(12), 1),
            );
            y += 2;

            frame.render_widget(
                Paragraph::new("Connection token").style(app.theme.style()),
                Rect::new(area.x + 2, y, width, 1),
            );
            y += 1;
            frame.render_widget(
                Paragraph::new(user.token.as_str())
                    .style(app.theme.code_style().add_modifier(Modifier::BOLD)),
                Rect::new(area.x + 4, y, width.saturating_sub(2), 1),
            );
            y += 2;

            if y < area.y + area.height {
                frame.render_widget(
                    Paragraph::new("Save the token now; it is not shown again.")
                        .style(app.theme.muted_style()),
                    Rect::new(area.x + 2, y, width, 1),
                );
            }
        }
        None => {
            draw_input_field(
                frame,
                Rect::new(area.x + 14, y, width.saturating_sub(12), 1),
                &app.theme,
                &app.app_username,
                is_focused,
                is_focused && app.mode == InputMode::Insert,
            );
            y += 2;

            frame.render_widget(
                Paragraph::new("Press i to type a name, Enter to create the user")
                    .style(app.theme.muted_style()),
                Rect::new(area.x + 2, y, width, 1),
            );
        }
    }
}
