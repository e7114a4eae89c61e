use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{CodeTab, Language, RenderedExample, render_example};
use crate::input::{Command, InputBuffer, InputMode, ModeAction, parse_command};
use crate::ui::widgets::StatusBarState;
use crate::ui::{Message, Theme};

/// State of the standalone SDK example screen
pub struct SdkViewer {
    pub theme: Theme,
    pub host: String,
    pub station: String,
    pub language: Language,
    pub tab: CodeTab,
    pub show_tabs: bool,
    pub example: RenderedExample,
    pub scroll: u16,

    pub mode: InputMode,
    pub command_buffer: InputBuffer,
    pub message: Option<Message>,
    pub status_bar: StatusBarState,
    pub show_help: bool,
    pub should_exit: bool,
}

impl SdkViewer {
    pub fn new(host: String, station: String, language: Language, tab: CodeTab) -> Self {
        let example = render_example(language, &host, &station);
        let mut viewer = Self {
            theme: Theme::default(),
            host,
            station,
            language,
            tab,
            show_tabs: true,
            example,
            scroll: 0,
            mode: InputMode::Normal,
            command_buffer: InputBuffer::new(),
            message: None,
            status_bar: StatusBarState::default(),
            show_help: false,
            should_exit: false,
        };
        viewer.update_status_bar();
        viewer
    }

    /// Hide the Producer/Consumer bar and pin the viewer to its starting tab
    pub fn with_tabs(mut self, show_tabs: bool) -> Self {
        self.show_tabs = show_tabs;
        self.update_status_bar();
        self
    }

    pub fn select_language(&mut self, language: Language) {
        self.language = language;
        self.example = render_example(language, &self.host, &self.station);
        self.scroll = 0;
    }

    pub fn code(&self) -> &str {
        self.example.code(self.tab)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.message.is_some() {
            self.message = None;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if let Some(action) = ModeAction::for_key(self.mode, &key) {
            if action != ModeAction::EnterInsert {
                self.mode = self.mode.transition(action);
                if action == ModeAction::Execute {
                    let cmd = self.command_buffer.content().to_string();
                    self.execute_command(&cmd);
                }
                self.command_buffer.clear();
                self.update_status_bar();
                return;
            }
        }

        match self.mode {
            InputMode::Command => self.handle_command_key(key),
            _ => self.handle_normal_key(key),
        }
        self.update_status_bar();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('d') => self.scroll = self.scroll.saturating_add(10),
                KeyCode::Char('u') => self.scroll = self.scroll.saturating_sub(10),
                KeyCode::Char('c') => self.should_exit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (self.language.index() + 1).min(Language::ALL.len() - 1);
                self.select_language(Language::ALL[next]);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let prev = self.language.index().saturating_sub(1);
                self.select_language(Language::ALL[prev]);
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('l') => {
                if self.show_tabs {
                    self.tab = self.tab.toggle();
                    self.scroll = 0;
                }
            }
            KeyCode::Char('J') | KeyCode::PageDown => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('K') | KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char(c) if ('1'..='4').contains(&c) => {
                let idx = c as usize - '1' as usize;
                self.select_language(Language::ALL[idx]);
            }
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.mode = self.mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => {
                self.command_buffer.insert(c);
            }
            _ => {}
        }
    }

    fn execute_command(&mut self, cmd: &str) {
        match parse_command(cmd) {
            Ok(Command::Language(name)) => match Language::from_name(&name) {
                Some(language) => self.select_language(language),
                None => self.message = Some(Message::error(format!("Unknown language: {name}"))),
            },
            Ok(Command::Help) => self.show_help = true,
            Ok(Command::Quit) => self.should_exit = true,
            Ok(other) => {
                self.message = Some(Message::error(format!("{other:?} is not available here")));
            }
            Err(e) => self.message = Some(Message::error(e.to_string())),
        }
    }

    fn update_status_bar(&mut self) {
        self.status_bar = if self.mode == InputMode::Command {
            StatusBarState::command_mode()
        } else if self.show_tabs {
            StatusBarState::new("j/k: language  Tab: producer/consumer", "J/K: scroll  q: quit")
        } else {
            StatusBarState::new("j/k: language", "J/K: scroll  q: quit")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn viewer() -> SdkViewer {
        SdkViewer::new("localhost".to_string(), "orders".to_string(), Language::Go, CodeTab::Producer)
    }

    #[test]
    fn language_selection_rerenders_sample() {
        let mut v = viewer();
        v.handle_key(key(KeyCode::Char('j')));
        assert_eq!(v.language, Language::NodeJs);
        assert!(v.code().contains("require(\"memphis-dev\")"));
        assert!(v.code().contains("orders"));
    }

    #[test]
    fn language_selection_is_clamped() {
        let mut v = viewer();
        v.handle_key(key(KeyCode::Char('k')));
        assert_eq!(v.language, Language::Go);
        v.handle_key(key(KeyCode::Char('4')));
        v.handle_key(key(KeyCode::Char('j')));
        assert_eq!(v.language, Language::Python);
    }

    #[test]
    fn tab_switches_to_consumer() {
        let mut v = viewer();
        v.handle_key(key(KeyCode::Tab));
        assert_eq!(v.tab, CodeTab::Consumer);
        assert!(v.code().contains("CreateConsumer"));
    }

    #[test]
    fn hidden_tabs_pin_the_starting_tab() {
        let mut v = SdkViewer::new(
            "localhost".to_string(),
            "orders".to_string(),
            Language::Go,
            CodeTab::Consumer,
        )
        .with_tabs(false);
        v.handle_key(key(KeyCode::Tab));
        v.handle_key(key(KeyCode::Char('l')));
        assert_eq!(v.tab, CodeTab::Consumer);
        assert!(v.code().contains("CreateConsumer"));
        assert!(!v.status_bar.left_hint.contains("Tab"));
    }

    #[test]
    fn lang_command_selects_language() {
        let mut v = viewer();
        v.handle_key(key(KeyCode::Char(':')));
        for c in "lang py".chars() {
            v.handle_key(key(KeyCode::Char(c)));
        }
        v.handle_key(key(KeyCode::Enter));
        assert_eq!(v.mode, InputMode::Normal);
        assert_eq!(v.language, Language::Python);
    }

    #[test]
    fn unknown_language_reports_error() {
        let mut v = viewer();
        v.handle_key(key(KeyCode::Char(':')));
        for c in "lang cobol".chars() {
            v.handle_key(key(KeyCode::Char(c)));
        }
        v.handle_key(key(KeyCode::Enter));
        assert!(v.message.as_ref().is_some_and(|m| m.is_error));
        assert_eq!(v.language, Language::Go);
    }
}
