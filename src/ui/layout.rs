use ratatui::layout::{Constraint, Flex, Layout as RatatuiLayout, Rect};

/// Areas of a console screen: a one-line header, the sidebar and main panel
/// side by side, a three-line message panel and a one-line status bar.
pub struct Layout {
    pub full: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub message: Rect,
    pub status: Rect,
}

impl Layout {
    /// `sidebar_percent` of the content width goes to the sidebar
    pub fn new(area: Rect, sidebar_percent: u16) -> Self {
        // The message row is reserved even when empty so the panels don't move
        let [header, content, message, status] = RatatuiLayout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [sidebar, main] = RatatuiLayout::horizontal([
            Constraint::Percentage(sidebar_percent),
            Constraint::Fill(1),
        ])
        .areas(content);

        Self {
            full: area,
            header,
            sidebar,
            main,
            message,
            status,
        }
    }

    /// Box of at most `width` x `height` centered in `area`, for popups
    pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
        let [column] = RatatuiLayout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = RatatuiLayout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(column);
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_add_up_to_the_screen() {
        let layout = Layout::new(Rect::new(0, 0, 100, 40), 25);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.message.height, 3);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.sidebar.width, 25);
        assert_eq!(layout.sidebar.width + layout.main.width, 100);
    }

    #[test]
    fn popup_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = Layout::centered_box(area, 60, 4);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.y, 3);
    }
}
