use ratatui::{prelude::*, widgets::Paragraph};

use crate::getstarted::GetStartedApp;
use crate::sdk::Language;
use crate::sdk::ui::draw_code_sample;

pub fn draw(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    if area.height < 8 {
        return;
    }

    let languages: Vec<Span> = Language::ALL
        .iter()
        .flat_map(|language| {
            let style = if *language == app.language {
                app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                app.theme.muted_style()
            };
            [Span::styled(format!(" {} ", language.label()), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(languages)),
        Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1),
    );

    let sample_area = Rect::new(
        area.x,
        area.y + 2,
        area.width,
        area.height.saturating_sub(2),
    );
    draw_code_sample(
        frame,
        sample_area,
        &app.theme,
        &app.code_example(),
        app.code_tab(),
        false,
        app.code_scroll,
    );
}
