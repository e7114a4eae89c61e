use ratatui::style::{Color, Modifier, Style};

use crate::input::InputMode;

/// Colors of the console screens
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub info: Color,
    pub text: Color,
    pub error: Color,
    pub success: Color,
    pub dim: Color,
    pub code: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            info: Color::Cyan,
            text: Color::White,
            error: Color::Red,
            success: Color::Green,
            dim: Color::DarkGray,
            code: Color::LightBlue,
        }
    }
}

fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

impl Theme {
    pub fn style(&self) -> Style {
        fg(self.text)
    }

    pub fn primary_style(&self) -> Style {
        fg(self.accent)
    }

    pub fn secondary_style(&self) -> Style {
        fg(self.info)
    }

    pub fn success_style(&self) -> Style {
        fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        fg(self.error)
    }

    /// Borders and disabled or hint text share the dim color
    pub fn border_style(&self) -> Style {
        fg(self.dim)
    }

    pub fn muted_style(&self) -> Style {
        fg(self.dim)
    }

    pub fn code_style(&self) -> Style {
        fg(self.code)
    }

    /// Highlight for a focused button or selected row
    pub fn button_style(&self, active: bool) -> Style {
        let base = if active { self.primary_style().add_modifier(Modifier::BOLD) } else { self.muted_style() };
        base.add_modifier(Modifier::REVERSED)
    }

    pub fn mode_style(&self, mode: InputMode) -> Style {
        let color = match mode {
            InputMode::Normal => self.info,
            InputMode::Insert => self.success,
            InputMode::Command => self.accent,
        };
        fg(color).add_modifier(Modifier::BOLD)
    }
}
