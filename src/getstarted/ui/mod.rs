mod code_step;
mod create_app_user;
mod create_station;
mod finish;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::steps::{LAST_STEP, StepId, StepStatus};
use super::{GetStartedApp, PanelFocus};
use crate::ui::widgets::{draw_message_panel, draw_status_line};
use crate::ui::Layout;

/// Main draw function for the get-started wizard
pub fn draw(frame: &mut Frame, app: &GetStartedApp) {
    let layout = Layout::new(frame.area(), 25);
    frame.render_widget(Clear, layout.full);

    draw_header(frame, layout.header, app);

    draw_sidebar(frame, layout.sidebar, app);
    draw_step_panel(frame, layout.main, app);

    let working = app.state().is_loading.then_some("Please wait...");
    draw_message_panel(frame, layout.message, &app.theme, app.message.as_ref(), working);

    let state = app.state();
    let progress = if state.is_loading {
        format!("{} {}/{}", app.spinner_char(), state.completed_steps, LAST_STEP)
    } else {
        format!("{}/{}", state.completed_steps, LAST_STEP)
    };
    draw_status_line(
        frame,
        layout.status,
        &app.theme,
        app.mode,
        app.command_buffer.content(),
        &app.status_bar,
        Some(progress),
    );

    if app.show_help {
        draw_help(frame, app);
    }
}

/// Greeting on the left, broker replica count on the right
fn draw_header(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    let title = format!(" {} | Welcome, {} ", app.title, app.username);
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );

    let (pods, style) = match app.state().actual_pods {
        Some(count) => (format!("[Broker replicas: {count}] "), app.theme.secondary_style()),
        None => ("[Broker replicas: --] ".to_string(), app.theme.muted_style()),
    };
    frame.render_widget(
        Paragraph::new(pods).style(style).alignment(Alignment::Right),
        area,
    );
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    let is_focused = app.panel_focus == PanelFocus::Sidebar;
    let state = app.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            app.theme.primary_style()
        } else {
            app.theme.border_style()
        })
        .title(" Get started ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    for (idx, step) in StepId::ALL.iter().enumerate() {
        if idx as u16 >= inner.height {
            break;
        }

        let status = StepStatus::of(*step, state.current_step, state.completed_steps);
        let is_cursor = is_focused && app.sidebar_cursor == step.number();

        let style = if is_cursor {
            app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            match status {
                StepStatus::Current => app.theme.secondary_style().add_modifier(Modifier::REVERSED),
                StepStatus::Completed => app.theme.secondary_style(),
                StepStatus::Available => app.theme.style(),
                StepStatus::Locked => app.theme.muted_style(),
            }
        };

        let line_area = Rect::new(inner.x, inner.y + idx as u16, inner.width, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} {}. {}", status.marker(), step.number(), step.name()))
                .style(style),
            line_area,
        );
    }

    if is_focused && inner.height > StepId::ALL.len() as u16 + 2 {
        frame.render_widget(
            Paragraph::new("j/k:nav Enter:open").style(app.theme.muted_style()),
            Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
        );
    }
}

fn draw_step_panel(frame: &mut Frame, area: Rect, app: &GetStartedApp) {
    let is_focused = app.panel_focus == PanelFocus::Content;
    let Some(step) = app.current_step_id() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            app.theme.primary_style()
        } else {
            app.theme.border_style()
        })
        .title(format!(" {} ", step.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 6 || inner.width < 20 {
        return;
    }

    // Description, step body, then the Back/Next row
    let chunks = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(step.description())
            .style(app.theme.muted_style())
            .wrap(Wrap { trim: true }),
        Rect::new(chunks[0].x + 1, chunks[0].y, chunks[0].width.saturating_sub(2), 2),
    );

    match step {
        StepId::CreateStation => create_station::draw(frame, chunks[1], app),
        StepId::CreateAppUser => create_app_user::draw(frame, chunks[1], app),
        StepId::ProduceData | StepId::ConsumeData => code_step::draw(frame, chunks[1], app),
        StepId::Finish => finish::draw(frame, chunks[1], app),
    }

    draw_buttons(frame, chunks[2], app, step);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &GetStartedApp, step: StepId) {
    let state = app.state();

    if !state.back_disabled {
        let back = " [b] Back ";
        frame.render_widget(
            Paragraph::new(back).style(app.theme.button_style(!state.is_loading)),
            Rect::new(area.x + 1, area.y, (back.len() as u16).min(area.width), 1),
        );
    }

    if state.is_hidden_button {
        return;
    }

    let label = match (state.is_loading, step) {
        (true, _) => format!(" {} Working... ", app.spinner_char()),
        (false, StepId::CreateStation) => " [Enter] Create station ".to_string(),
        (false, StepId::Finish) => " [Enter] Go to dashboard ".to_string(),
        (false, _) => " [Enter] Next ".to_string(),
    };
    let width = (label.len() as u16).min(area.width);
    let active = !state.next_disabled && !state.is_loading;
    frame.render_widget(
        Paragraph::new(label).style(app.theme.button_style(active)),
        Rect::new(area.x + area.width.saturating_sub(width + 1), area.y, width, 1),
    );
}

fn draw_help(frame: &mut Frame, app: &GetStartedApp) {
    let area = Layout::centered_box(frame.area(), 60, 24);

    let help_text = [
        "",
        "Navigation:",
        "",
        "  Ctrl+h / Ctrl+l  Focus sidebar / step",
        "  n / Enter        Next",
        "  b                Back",
        "  1-5              Jump to a step (sidebar)",
        "",
        "Step keys:",
        "",
        "  j/k, Tab         Move between fields",
        "  i                Edit the focused field",
        "  Space            Change a selection",
        "  J/K              Scroll code",
        "",
        "Commands:",
        "",
        "  :next :back :step N :skip :finish",
        "  :analytics [on|off] :lang NAME :q",
        "",
        "Press q or Esc to close",
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Help ");

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    for (i, line) in help_text.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(*line).style(app.theme.style()),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}
