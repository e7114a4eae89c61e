use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl InputMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            InputMode::Normal => "NORMAL",
            InputMode::Insert => "INSERT",
            InputMode::Command => "COMMAND",
        }
    }

    pub fn transition(&self, action: ModeAction) -> InputMode {
        match (self, action) {
            (InputMode::Normal, ModeAction::EnterInsert) => InputMode::Insert,
            (InputMode::Normal, ModeAction::EnterCommand) => InputMode::Command,
            (InputMode::Insert, ModeAction::Escape) => InputMode::Normal,
            (InputMode::Command, ModeAction::Escape) => InputMode::Normal,
            (InputMode::Command, ModeAction::Execute) => InputMode::Normal,
            _ => *self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    EnterInsert,
    EnterCommand,
    Escape,
    Execute,
}

impl ModeAction {
    /// The mode change a key requests in the given mode, if any. Keys that
    /// return `None` belong to whatever screen is handling input.
    pub fn for_key(mode: InputMode, key: &KeyEvent) -> Option<ModeAction> {
        match (mode, key.code) {
            (InputMode::Normal, KeyCode::Char(':')) => Some(ModeAction::EnterCommand),
            (InputMode::Normal, KeyCode::Char('i') | KeyCode::Char('a')) => {
                Some(ModeAction::EnterInsert)
            }
            (InputMode::Insert | InputMode::Command, KeyCode::Esc) => Some(ModeAction::Escape),
            (InputMode::Command, KeyCode::Enter) => Some(ModeAction::Execute),
            _ => None,
        }
    }
}
