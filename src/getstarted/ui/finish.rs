use ratatui::{prelude::*, widgets::Paragraph};

use crate::getstarted::GetStartedApp;

const LINKS: [(&str, &str); 3] = [
    (
        "Docs",
        "https://app.gitbook.com/o/-MSyW3CRw3knM-KGk6G6/s/t7NJvDh5VSGZnmEsyR9h/getting-started/1-installation",
    ),
    ("GitHub", "https://github.com/memphisdev"),
    ("Discord", "https://discord.com/invite/WZpysvAeTf"),
];

pub fn draw(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    if area.height < 6 || area.width < 30 {
        return;
    }

    let width = area.width.saturating_sub(4);
    let mut y = area.y;

    if let Some(name) = &app.state().station_name {
        frame.render_widget(
            Paragraph::new(format!("Station \"{name}\" is ready for data"))
                .style(app.theme.success_style()),
            Rect::new(area.x + 2, y, width, 1),
        );
        y += 2;
    }

    let (mark, style) = if app.allow_analytics() {
        ("[x]", app.theme.secondary_style())
    } else {
        ("[ ]", app.theme.muted_style())
    };
    frame.render_widget(
        Paragraph::new(format!("{mark} I allow Memphis team to reach out and ask for feedback (Space)"))
            .style(style),
        Rect::new(area.x + 2, y, width, 1),
    );
    y += 2;

    frame.render_widget(
        Paragraph::new("Link to our channels").style(app.theme.muted_style()),
        Rect::new(area.x + 2, y, width, 1),
    );
    y += 1;

    for (label, url) in LINKS {
        if y >= area.y + area.height {
            break;
        }
        let line = Line::from(vec![
            Span::styled(format!("{label:<8}"), app.theme.style()),
            Span::styled(url, app.theme.code_style()),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(area.x + 2, y, width, 1));
        y += 1;
    }
}
