mod form;
mod handlers;
mod slot;
pub mod state;
pub mod steps;
pub mod ui;

pub use form::{StationField, StationForm, visible_fields};
pub use slot::{NextHandler, NextSlot};
pub use state::{Action, DraftEdit, StationDraft, WizardPatch, WizardState, reduce};
pub use steps::{FIRST_STEP, LAST_STEP, StepId, StepStatus};

use std::future::Future;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::api::{
    AppUser, BrokerApi, MainOverview, Station, StationRequest, select_actual_pods,
};
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::flags::{Flag, FlagStore};
use crate::input::{Command, InputBuffer, InputMode, ModeAction, parse_command};
use crate::navigation::{ConsoleNavigator, Navigator, paths};
use crate::sdk::{BrokerHost, CodeTab, Language, RenderedExample, render_example};
use crate::ui::widgets::StatusBarState;
use crate::ui::{Message, Theme};

/// Work the event loop performs on behalf of the wizard
#[derive(Debug)]
pub enum GetStartedAction {
    CreateStation(StationRequest),
    CreateAppUser(String),
    ToggleAnalytics(bool),
    /// Complete the wizard and leave
    Finish,
    /// Leave without completing; the wizard is not shown again
    Skip,
    /// Leave without writing any flag
    Quit,
}

/// Completion of a spawned broker call
#[derive(Debug)]
pub enum TaskMessage {
    StationCreated(Result<Station>),
    AppUserCreated(Result<AppUser>),
    Overview(Result<MainOverview>),
    AnalyticsUpdated { enabled: bool, result: Result<()> },
}

/// A completion tagged with the wizard generation that started it
#[derive(Debug)]
pub struct TaskEnvelope {
    pub generation: u64,
    pub message: TaskMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Sidebar,
    Content,
}

/// Application user created on step 2
pub struct CreatedUser {
    pub username: String,
    pub token: Zeroizing<String>,
}

/// The get-started wizard: owns `WizardState`, the next-handler slot and the
/// channel spawned broker calls report back on.
pub struct GetStartedApp {
    pub theme: Theme,
    pub title: String,
    pub username: String,
    pub data_sentence: String,

    state: WizardState,
    slot: NextSlot,

    api: Arc<dyn BrokerApi>,
    flags: FlagStore,
    navigator: ConsoleNavigator,

    generation: u64,
    tx: mpsc::UnboundedSender<TaskEnvelope>,
    rx: mpsc::UnboundedReceiver<TaskEnvelope>,

    // Vim mode state
    pub mode: InputMode,
    pub command_buffer: InputBuffer,
    pub panel_focus: PanelFocus,
    pub sidebar_cursor: u8,

    // Step-local forms
    pub station_form: StationForm,
    pub app_username: InputBuffer,
    created_user: Option<CreatedUser>,

    // SDK example shown on the produce/consume steps
    pub host: String,
    pub language: Language,
    pub code_scroll: u16,

    allow_analytics: bool,
    analytics_pending: bool,

    pub message: Option<Message>,
    pub status_bar: StatusBarState,
    pub show_help: bool,
    pub should_exit: bool,
    spinner_frame: usize,
}

impl GetStartedApp {
    pub fn new(
        config: &ConsoleConfig,
        api: Arc<dyn BrokerApi>,
        flags: FlagStore,
        navigator: ConsoleNavigator,
    ) -> Self {
        let host = BrokerHost::from_flags(config.is_sandbox(), &flags).hostname();
        let allow_analytics = flags.get_bool(Flag::AllowAnalytics);
        let state = WizardState::default();
        let station_form = StationForm::from_draft(&state.station_draft);
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            theme: Theme::default(),
            title: config.general.title.clone(),
            username: config.general.username.clone(),
            data_sentence: config.general.data_sentence.clone(),
            state,
            slot: NextSlot::default(),
            api,
            flags,
            navigator,
            generation: 0,
            tx,
            rx,
            mode: InputMode::Normal,
            command_buffer: InputBuffer::new(),
            panel_focus: PanelFocus::Content,
            sidebar_cursor: FIRST_STEP,
            station_form,
            app_username: InputBuffer::new(),
            created_user: None,
            host,
            language: Language::Go,
            code_scroll: 0,
            allow_analytics,
            analytics_pending: false,
            message: None,
            status_bar: StatusBarState::default(),
            show_help: false,
            should_exit: false,
            spinner_frame: 0,
        };
        app.on_step_changed();
        app.update_status_bar();
        app
    }

    /// Start the one-off fetch of the running broker replica count
    pub fn mount(&mut self) {
        let api = Arc::clone(&self.api);
        self.spawn_task(async move { TaskMessage::Overview(api.main_overview().await) });
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn navigator(&self) -> &ConsoleNavigator {
        &self.navigator
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn created_user(&self) -> Option<&CreatedUser> {
        self.created_user.as_ref()
    }

    pub fn allow_analytics(&self) -> bool {
        self.allow_analytics
    }

    pub fn registered_step(&self) -> Option<StepId> {
        self.slot.step()
    }

    pub fn current_step_id(&self) -> Option<StepId> {
        StepId::from_number(self.state.current_step)
    }

    /// Apply a transition, then run the step-change effect if the active
    /// step moved. Draft edits on the station step keep `next_disabled` in
    /// line with whether the draft would be accepted.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.state.current_step;
        let edits_draft = matches!(action, Action::EditDraft(_));
        self.state = reduce(std::mem::take(&mut self.state), action);
        if self.state.current_step != before {
            self.on_step_changed();
        }
        if edits_draft && self.current_step_id() == Some(StepId::CreateStation) {
            let invalid = self.state.station_draft.to_request().is_err();
            if self.state.next_disabled != invalid {
                self.dispatch(Action::SetNextDisabled(invalid));
            }
        }
    }

    fn on_step_changed(&mut self) {
        let step = self.state.current_step;
        self.dispatch(Action::SetBackDisabled(step == FIRST_STEP));

        match StepId::from_number(step) {
            Some(id) => self.slot.register(id, handlers::handler_for(id)),
            None => self.slot.clear(),
        }

        let hide_next = step == StepId::CreateAppUser.number() && self.created_user.is_none();
        if self.state.is_hidden_button != hide_next {
            self.dispatch(Action::SetHiddenButton(hide_next));
        }

        self.sidebar_cursor = step;
        self.code_scroll = 0;
        self.mode = InputMode::Normal;
    }

    /// Run the mounted step's next handler
    pub fn on_next(&mut self) -> Option<GetStartedAction> {
        if self.state.is_loading || self.state.next_disabled {
            return None;
        }
        let handler = self.slot.handler()?;
        handler(self)
    }

    pub fn on_back(&mut self) {
        if self.state.back_disabled || self.state.is_loading {
            return;
        }
        self.dispatch(Action::SetCurrentStep(self.state.current_step.saturating_sub(1)));
    }

    /// Sidebar jump; only completed steps and the one after them are reachable
    pub fn select_step(&mut self, step: u8) {
        if self.state.is_loading || !(FIRST_STEP..=LAST_STEP).contains(&step) {
            return;
        }
        if step <= self.state.completed_steps + 1 {
            self.dispatch(Action::SetCurrentStep(step));
        } else {
            self.set_error(format!("Complete step {} first", self.state.completed_steps + 1));
        }
    }

    /// Record `step` as done and move to the one after it
    pub(crate) fn complete_step(&mut self, step: StepId) {
        let number = step.number();
        self.dispatch(Action::SetCompletedSteps(self.state.completed_steps.max(number)));
        if number < LAST_STEP {
            self.dispatch(Action::SetCurrentStep(number + 1));
        }
    }

    /// Validate the step 2 form and request the user
    pub fn create_app_user(&mut self) -> Option<GetStartedAction> {
        if self.state.is_loading {
            return None;
        }
        if let Some(existing) = self.created_user.as_ref().map(|u| u.username.clone()) {
            self.set_info(format!("User \"{existing}\" already exists"));
            return None;
        }
        match state::validate_username(self.app_username.content()) {
            Ok(username) => {
                self.dispatch(Action::SetLoading(true));
                Some(GetStartedAction::CreateAppUser(username))
            }
            Err(e) => {
                self.set_error(e.to_string());
                None
            }
        }
    }

    pub fn toggle_analytics(&mut self) -> Option<GetStartedAction> {
        self.request_analytics(!self.allow_analytics)
    }

    fn request_analytics(&mut self, enabled: bool) -> Option<GetStartedAction> {
        if self.analytics_pending || enabled == self.allow_analytics {
            return None;
        }
        self.analytics_pending = true;
        Some(GetStartedAction::ToggleAnalytics(enabled))
    }

    /// Execute an action returned by `handle_key` or `on_next`
    pub async fn perform(&mut self, action: GetStartedAction) {
        match action {
            GetStartedAction::CreateStation(request) => {
                info!("Creating station {}", request.name);
                let api = Arc::clone(&self.api);
                self.spawn_task(async move {
                    TaskMessage::StationCreated(api.create_station(&request).await)
                });
            }
            GetStartedAction::CreateAppUser(username) => {
                info!("Creating application user {}", username);
                let api = Arc::clone(&self.api);
                self.spawn_task(async move {
                    TaskMessage::AppUserCreated(api.create_app_user(&username).await)
                });
            }
            GetStartedAction::ToggleAnalytics(enabled) => {
                let api = Arc::clone(&self.api);
                self.spawn_task(async move {
                    let result = api.edit_analytics(enabled).await;
                    TaskMessage::AnalyticsUpdated { enabled, result }
                });
            }
            GetStartedAction::Finish => self.finish().await,
            GetStartedAction::Skip => self.skip(),
            GetStartedAction::Quit => self.should_exit = true,
        }
    }

    fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = TaskMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let message = task.await;
            if tx.send(TaskEnvelope { generation, message }).is_err() {
                debug!("Wizard generation {} is gone, dropping result", generation);
            }
        });
    }

    /// Next completion from a spawned call. Never resolves to `None` while
    /// the app is alive because it holds a sender itself.
    pub async fn next_message(&mut self) -> Option<TaskEnvelope> {
        self.rx.recv().await
    }

    pub fn handle_task_message(&mut self, envelope: TaskEnvelope) {
        if envelope.generation != self.generation {
            debug!(
                "Ignoring result from generation {} (current {})",
                envelope.generation, self.generation
            );
            return;
        }

        match envelope.message {
            TaskMessage::StationCreated(Ok(station)) => {
                info!("Station {} created", station.name);
                self.dispatch(Action::SetLoading(false));
                self.set_info(format!("Station \"{}\" created", station.name));
                self.dispatch(Action::SetStationName(station.name));
                self.complete_step(StepId::CreateStation);
            }
            TaskMessage::StationCreated(Err(e)) => {
                warn!("Failed to create station: {}", e);
                self.dispatch(Action::SetLoading(false));
                self.set_error(e.to_string());
            }
            TaskMessage::AppUserCreated(Ok(user)) => {
                info!("Application user {} created", user.username);
                self.dispatch(Action::SetLoading(false));
                self.set_info(format!("User \"{}\" created", user.username));
                self.created_user = Some(CreatedUser {
                    username: user.username,
                    token: Zeroizing::new(user.broker_connection_creds),
                });
                self.dispatch(Action::SetHiddenButton(false));
            }
            TaskMessage::AppUserCreated(Err(e)) => {
                warn!("Failed to create application user: {}", e);
                self.dispatch(Action::SetLoading(false));
                self.set_error(e.to_string());
            }
            TaskMessage::Overview(Ok(overview)) => {
                let pods = select_actual_pods(&overview.system_components);
                debug!("Broker replicas: {:?}", pods);
                self.dispatch(Action::SetActualPods(pods));
            }
            TaskMessage::Overview(Err(e)) => {
                warn!("Failed to fetch overview data: {}", e);
            }
            TaskMessage::AnalyticsUpdated { enabled, result } => {
                self.analytics_pending = false;
                match result {
                    // The local value follows the flag file; a failed write
                    // leaves both untouched
                    Ok(()) => match self.flags.set(Flag::AllowAnalytics, enabled) {
                        Ok(()) => {
                            info!("Analytics set to {}", enabled);
                            self.allow_analytics = enabled;
                        }
                        Err(e) => warn!("Failed to persist analytics flag: {}", e),
                    },
                    Err(e) => warn!("Failed to update analytics: {}", e),
                }
            }
        }
        self.update_status_bar();
    }

    /// Drop everything tied to the current run. Pending calls keep running
    /// but their results land on a closed channel.
    fn teardown(&mut self) {
        self.generation += 1;
        let (tx, rx) = mpsc::unbounded_channel();
        self.tx = tx;
        self.rx = rx;

        self.station_form = StationForm::from_draft(&self.state.station_draft);
        self.app_username.clear();
        self.created_user = None;
        self.analytics_pending = false;
    }

    /// Reset the wizard, tell the broker the user is done and leave for the
    /// created station.
    pub async fn finish(&mut self) {
        let station = self.state.station_name.clone();

        self.dispatch(Action::InitialState(WizardPatch::default()));
        self.teardown();

        if let Err(e) = self.api.done_next_steps().await {
            warn!("Failed to mark next steps as done: {}", e);
        }

        let path = match station {
            Some(name) => paths::station(&name),
            None => paths::OVERVIEW.to_string(),
        };
        self.navigator.push(&path);

        if let Err(e) = self.flags.set(Flag::SkipGetStarted, true) {
            warn!("Failed to persist skip flag: {}", e);
        }
        self.should_exit = true;
    }

    pub fn skip(&mut self) {
        if let Err(e) = self.flags.set(Flag::SkipGetStarted, true) {
            warn!("Failed to persist skip flag: {}", e);
        }
        self.navigator.push(paths::OVERVIEW);
        self.teardown();
        self.should_exit = true;
    }

    /// Sample for the produce/consume steps, rendered for the created
    /// station (or the draft name before one exists).
    pub fn code_example(&self) -> RenderedExample {
        let station = self
            .state
            .station_name
            .as_deref()
            .unwrap_or(&self.state.station_draft.name);
        render_example(self.language, &self.host, station)
    }

    pub fn code_tab(&self) -> CodeTab {
        match self.current_step_id() {
            Some(StepId::ConsumeData) => CodeTab::Consumer,
            _ => CodeTab::Producer,
        }
    }

    fn cycle_language(&mut self, forward: bool) {
        let count = Language::ALL.len();
        let idx = self.language.index();
        let next = if forward { (idx + 1) % count } else { (idx + count - 1) % count };
        self.language = Language::ALL[next];
        self.code_scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GetStartedAction> {
        // Clear message on any key (unless working)
        if self.message.is_some() && !self.state.is_loading {
            self.message = None;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            self.update_status_bar();
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(GetStartedAction::Quit);
        }

        let result = match self.mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Insert => self.handle_insert_mode(key),
            InputMode::Command => self.handle_command_mode(key),
        };

        self.update_status_bar();
        result
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<GetStartedAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('h') => self.panel_focus = PanelFocus::Sidebar,
                KeyCode::Char('l') => self.panel_focus = PanelFocus::Content,
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(':') => {
                self.mode = self.mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
                return None;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
                return None;
            }
            KeyCode::Char('n') => return self.on_next(),
            KeyCode::Char('b') => {
                self.on_back();
                return None;
            }
            KeyCode::Char('q') => return Some(GetStartedAction::Quit),
            _ => {}
        }

        match self.panel_focus {
            PanelFocus::Sidebar => {
                self.handle_sidebar_key(key);
                None
            }
            PanelFocus::Content => self.handle_step_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.sidebar_cursor = (self.sidebar_cursor + 1).min(LAST_STEP);
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1).max(FIRST_STEP);
            }
            KeyCode::Char(c @ '1'..='5') => {
                self.sidebar_cursor = c as u8 - b'0';
                self.select_step(self.sidebar_cursor);
            }
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                self.select_step(self.sidebar_cursor);
                if self.state.current_step == self.sidebar_cursor {
                    self.panel_focus = PanelFocus::Content;
                }
            }
            KeyCode::Esc => self.panel_focus = PanelFocus::Content,
            _ => {}
        }
    }

    fn handle_step_key(&mut self, key: KeyEvent) -> Option<GetStartedAction> {
        let step = self.current_step_id()?;

        if key.code == KeyCode::Esc {
            self.panel_focus = PanelFocus::Sidebar;
            return None;
        }

        match step {
            StepId::CreateStation => {
                let retention = self.state.station_draft.retention_type;
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                        self.station_form.focus_next(retention);
                    }
                    KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                        self.station_form.focus_prev(retention);
                    }
                    KeyCode::Char('i') | KeyCode::Char('a') => {
                        if !self.station_form.focus.is_selector() {
                            self.mode = self.mode.transition(ModeAction::EnterInsert);
                        }
                    }
                    KeyCode::Char(' ') | KeyCode::Char('h') | KeyCode::Char('l')
                    | KeyCode::Left | KeyCode::Right => self.cycle_selector(),
                    KeyCode::Enter => return self.on_next(),
                    _ => {}
                }
                None
            }
            StepId::CreateAppUser => match key.code {
                KeyCode::Char('i') | KeyCode::Char('a') if self.created_user.is_none() => {
                    self.mode = self.mode.transition(ModeAction::EnterInsert);
                    None
                }
                KeyCode::Enter if self.created_user.is_some() => self.on_next(),
                KeyCode::Enter => self.create_app_user(),
                _ => None,
            },
            StepId::ProduceData | StepId::ConsumeData => {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Char(']') | KeyCode::Right => {
                        self.cycle_language(true);
                    }
                    KeyCode::Char('k') | KeyCode::Char('[') | KeyCode::Left => {
                        self.cycle_language(false);
                    }
                    KeyCode::Char('J') | KeyCode::PageDown => {
                        self.code_scroll = self.code_scroll.saturating_add(1);
                    }
                    KeyCode::Char('K') | KeyCode::PageUp => {
                        self.code_scroll = self.code_scroll.saturating_sub(1);
                    }
                    KeyCode::Enter => return self.on_next(),
                    _ => {}
                }
                None
            }
            StepId::Finish => match key.code {
                KeyCode::Char(' ') | KeyCode::Char('a') => self.toggle_analytics(),
                KeyCode::Enter => self.on_next(),
                _ => None,
            },
        }
    }

    fn cycle_selector(&mut self) {
        let draft = &self.state.station_draft;
        let edit = match self.station_form.focus {
            StationField::RetentionType => DraftEdit::RetentionType(draft.retention_type.next()),
            StationField::StorageType => DraftEdit::StorageType(draft.storage_type.toggle()),
            _ => return,
        };
        self.dispatch(Action::EditDraft(edit));
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) -> Option<GetStartedAction> {
        let retention = self.state.station_draft.retention_type;
        match key.code {
            KeyCode::Esc => {
                self.mode = self.mode.transition(ModeAction::Escape);
            }
            KeyCode::Enter => {
                self.mode = self.mode.transition(ModeAction::Escape);
                if self.current_step_id() == Some(StepId::CreateAppUser) {
                    return self.create_app_user();
                }
            }
            KeyCode::Tab if self.current_step_id() == Some(StepId::CreateStation) => {
                self.station_form.focus_next(retention);
                if self.station_form.focus.is_selector() {
                    self.mode = self.mode.transition(ModeAction::Escape);
                }
            }
            KeyCode::BackTab if self.current_step_id() == Some(StepId::CreateStation) => {
                self.station_form.focus_prev(retention);
                if self.station_form.focus.is_selector() {
                    self.mode = self.mode.transition(ModeAction::Escape);
                }
            }
            KeyCode::Backspace => self.edit_focused(|b| {
                b.delete_back();
            }),
            KeyCode::Delete => self.edit_focused(|b| {
                b.delete_forward();
            }),
            KeyCode::Left => self.edit_focused(InputBuffer::move_left),
            KeyCode::Right => self.edit_focused(InputBuffer::move_right),
            KeyCode::Home => self.edit_focused(InputBuffer::move_start),
            KeyCode::End => self.edit_focused(InputBuffer::move_end),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'u' => self.edit_focused(InputBuffer::clear),
                        'a' => self.edit_focused(InputBuffer::move_start),
                        'e' => self.edit_focused(InputBuffer::move_end),
                        _ => {}
                    }
                } else {
                    self.edit_focused(|b| {
                        b.insert(c);
                    });
                }
            }
            _ => {}
        }
        None
    }

    /// Apply `edit` to the focused buffer and stage the result in the draft
    fn edit_focused(&mut self, edit: impl FnOnce(&mut InputBuffer)) {
        match self.current_step_id() {
            Some(StepId::CreateStation) => {
                let Some(buffer) = self.station_form.focused_buffer_mut() else {
                    return;
                };
                edit(buffer);
                if let Some(draft_edit) = self.station_form.edit_for_focus() {
                    self.dispatch(Action::EditDraft(draft_edit));
                }
            }
            Some(StepId::CreateAppUser) => edit(&mut self.app_username),
            _ => {}
        }
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Option<GetStartedAction> {
        match key.code {
            KeyCode::Esc => {
                self.mode = self.mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.mode = self.mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                return self.execute_command(&cmd);
            }
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
        None
    }

    fn execute_command(&mut self, cmd: &str) -> Option<GetStartedAction> {
        let command = match parse_command(cmd) {
            Ok(command) => command,
            Err(e) => {
                self.set_error(e.to_string());
                return None;
            }
        };

        match command {
            Command::Next => return self.on_next(),
            Command::Back => self.on_back(),
            Command::Step(step) => self.select_step(step),
            Command::Skip => return Some(GetStartedAction::Skip),
            Command::Finish => {
                if self.current_step_id() == Some(StepId::Finish) {
                    return self.on_next();
                }
                self.set_error("Finish is only available on the last step".to_string());
            }
            Command::Analytics(value) => {
                if self.current_step_id() != Some(StepId::Finish) {
                    self.set_error("Analytics can be changed on the last step".to_string());
                    return None;
                }
                return match value {
                    Some(enabled) => self.request_analytics(enabled),
                    None => self.toggle_analytics(),
                };
            }
            Command::Language(name) => match Language::from_name(&name) {
                Some(language) => {
                    self.language = language;
                    self.code_scroll = 0;
                }
                None => self.set_error(format!("Unknown language: {name}")),
            },
            Command::Help => self.show_help = true,
            Command::Quit => return Some(GetStartedAction::Quit),
        }
        None
    }

    pub fn set_error(&mut self, text: String) {
        self.message = Some(Message::error(text));
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message::info(text));
    }

    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 4;
        self.update_status_bar();
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
        SPINNER[self.spinner_frame]
    }

    /// Update status bar based on current application state
    pub fn update_status_bar(&mut self) {
        if self.state.is_loading {
            self.status_bar = StatusBarState::executing();
            return;
        }

        if self.mode == InputMode::Command {
            self.status_bar = StatusBarState::command_mode();
            return;
        }

        self.status_bar = match self.panel_focus {
            PanelFocus::Sidebar => {
                StatusBarState::new("j/k: steps  Enter: open", "Ctrl+l: content  ?: help")
            }
            PanelFocus::Content => self.content_status_bar(),
        };
    }

    fn content_status_bar(&self) -> StatusBarState {
        let insert = self.mode == InputMode::Insert;
        match self.current_step_id() {
            Some(StepId::CreateStation) if insert => {
                StatusBarState::new("Tab: next field  Esc: done", "Enter: done")
            }
            Some(StepId::CreateStation) => {
                StatusBarState::new("i: edit  j/k: fields  Space: change", "Enter: create  b: back")
            }
            Some(StepId::CreateAppUser) if insert => {
                StatusBarState::new("Esc: done", "Enter: create user")
            }
            Some(StepId::CreateAppUser) if self.created_user.is_some() => {
                StatusBarState::new("b: back", "Enter: next")
            }
            Some(StepId::CreateAppUser) => StatusBarState::new("i: edit", "Enter: create user"),
            Some(StepId::ProduceData) | Some(StepId::ConsumeData) => {
                StatusBarState::new("j/k: language  J/K: scroll", "Enter: next  b: back")
            }
            Some(StepId::Finish) => {
                StatusBarState::new("Space: analytics  :skip", "Enter: finish  b: back")
            }
            None => StatusBarState::default(),
        }
    }
}
