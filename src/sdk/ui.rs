use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use super::{CodeTab, Language, RenderedExample, SdkViewer};
use crate::ui::widgets::{draw_message_panel, draw_status_line};
use crate::ui::{Layout, Theme};

/// Main draw function for the SDK example viewer
pub fn draw(frame: &mut Frame, viewer: &SdkViewer) {
    let layout = Layout::new(frame.area(), 20);
    frame.render_widget(Clear, layout.full);

    draw_header(frame, layout.header, viewer);

    draw_language_list(frame, layout.sidebar, &viewer.theme, viewer.language);
    draw_code_sample(
        frame,
        layout.main,
        &viewer.theme,
        &viewer.example,
        viewer.tab,
        viewer.show_tabs,
        viewer.scroll,
    );

    draw_message_panel(frame, layout.message, &viewer.theme, viewer.message.as_ref(), None);
    draw_status_line(
        frame,
        layout.status,
        &viewer.theme,
        viewer.mode,
        viewer.command_buffer.content(),
        &viewer.status_bar,
        None,
    );

    if viewer.show_help {
        draw_help(frame, &viewer.theme);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, viewer: &SdkViewer) {
    frame.render_widget(
        Paragraph::new(format!(" Code example: {} ", viewer.station))
            .style(viewer.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );
    frame.render_widget(
        Paragraph::new(format!("[Host: {}] ", viewer.host))
            .style(viewer.theme.secondary_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_language_list(frame: &mut Frame, area: Rect, theme: &Theme, selected: Language) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Language ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, language) in Language::ALL.iter().enumerate() {
        if idx as u16 >= inner.height {
            break;
        }
        let style = if *language == selected {
            theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            theme.style()
        };
        frame.render_widget(
            Paragraph::new(format!(" {} {}", idx + 1, language.label())).style(style),
            Rect::new(inner.x, inner.y + idx as u16, inner.width, 1),
        );
    }
}

/// Installation line, optional Producer/Consumer tab bar and the code itself.
/// Also used by the produce/consume wizard steps, which hide the tab bar.
pub fn draw_code_sample(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    example: &RenderedExample,
    tab: CodeTab,
    show_tabs: bool,
    scroll: u16,
) {
    if area.height < 6 || area.width < 20 {
        return;
    }

    let chunks = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Installation
            Constraint::Length(if show_tabs { 1 } else { 0 }),
            Constraint::Min(3),    // Code
        ])
        .split(area);

    let install_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Installation ");
    frame.render_widget(
        Paragraph::new(format!(" $ {}", example.installation))
            .style(theme.secondary_style())
            .block(install_block),
        chunks[0],
    );

    if show_tabs {
        let titles = [CodeTab::Producer, CodeTab::Consumer].map(|t| t.label());
        let selected = if tab == CodeTab::Producer { 0 } else { 1 };
        frame.render_widget(
            Tabs::new(titles)
                .select(selected)
                .style(theme.muted_style())
                .highlight_style(theme.primary_style().add_modifier(Modifier::BOLD)),
            chunks[1],
        );
    }

    let code_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" {} ", example.language.lang_code()));
    frame.render_widget(
        Paragraph::new(example.code(tab))
            .style(theme.code_style())
            .block(code_block)
            .scroll((scroll, 0)),
        chunks[2],
    );
}

fn draw_help(frame: &mut Frame, theme: &Theme) {
    let help_text = [
        "",
        "  j/k, 1-4       Select language",
        "  Tab, h/l       Producer / Consumer",
        "  J/K            Scroll code",
        "  Ctrl+d/u       Scroll half page",
        "  :lang <name>   Select language by name",
        "  q, :q          Quit",
        "",
        "Press q or Esc to close",
    ];

    let area = Layout::centered_box(frame.area(), 48, help_text.len() as u16 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Help ");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    for (i, line) in help_text.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(*line).style(theme.style()),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}
