use ratatui::{prelude::*, widgets::Paragraph};

use crate::getstarted::form::{StationField, visible_fields};
use crate::getstarted::{GetStartedApp, PanelFocus};
use crate::input::InputMode;
use crate::ui::widgets::draw_input_field;

const LABEL_WIDTH: u16 = 16;

pub fn draw(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    if area.width < 30 {
        return;
    }

    let draft = &app.state().station_draft;
    let form = &app.station_form;
    let is_content_focused = app.panel_focus == PanelFocus::Content;
    let mut y = area.y;

    for field in visible_fields(draft.retention_type) {
        if y >= area.y + area.height {
            break;
        }

        let is_field_focused = is_content_focused && form.focus == field;
        let label_style = if is_field_focused {
            app.theme.primary_style()
        } else {
            app.theme.style()
        };
        frame.render_widget(
            Paragraph::new(field.label()).style(label_style),
            Rect::new(area.x + 2, y, LABEL_WIDTH, 1),
        );

        let value_area = Rect::new(
            area.x + 2 + LABEL_WIDTH,
            y,
            area.width.saturating_sub(LABEL_WIDTH + 4),
            1,
        );

        match field {
            StationField::RetentionType | StationField::StorageType => {
                let value = if field == StationField::RetentionType {
                    draft.retention_type.label()
                } else {
                    draft.storage_type.label()
                };
                let style = if is_field_focused {
                    app.theme.primary_style().add_modifier(Modifier::BOLD)
                } else {
                    app.theme.secondary_style()
                };
                frame.render_widget(Paragraph::new(format!("< {value} >")).style(style), value_area);
            }
            _ => {
                if let Some(buffer) = form.buffer(field) {
                    draw_input_field(
                        frame,
                        value_area,
                        &app.theme,
                        buffer,
                        is_field_focused,
                        is_field_focused && app.mode == InputMode::Insert,
                    );
                }
            }
        }

        y += 1;
    }

    // Derived retention value, as it will be sent
    if y + 1 < area.y + area.height {
        frame.render_widget(
            Paragraph::new(format!(
                "Retention value: {} ({})",
                draft.retention_value,
                draft.retention_type.label().to_lowercase()
            ))
            .style(app.theme.muted_style()),
            Rect::new(area.x + 2, y + 1, area.width.saturating_sub(4), 1),
        );
    }

    if let Some(name) = &app.state().station_name {
        if y + 2 < area.y + area.height {
            frame.render_widget(
                Paragraph::new(format!("Created: {name}")).style(app.theme.success_style()),
                Rect::new(area.x + 2, y + 2, area.width.saturating_sub(4), 1),
            );
        }
    }
}
