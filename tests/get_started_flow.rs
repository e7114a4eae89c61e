use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use memphis_console::api::{
    AppUser, BrokerApi, MainOverview, Station, StationRequest, SystemComponent,
};
use memphis_console::config::ConsoleConfig;
use memphis_console::error::{ConsoleError, Result};
use memphis_console::flags::{Flag, FlagStore};
use memphis_console::getstarted::{
    Action, DraftEdit, GetStartedAction, GetStartedApp, StepId, TaskEnvelope, TaskMessage,
    WizardState,
};
use memphis_console::navigation::ConsoleNavigator;

/// Records every call; fails all of them when `fail` is set
#[derive(Default)]
struct FakeApi {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(ConsoleError::Api {
                status: 500,
                message: "broker unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrokerApi for FakeApi {
    async fn create_station(&self, request: &StationRequest) -> Result<Station> {
        self.record(format!("create_station {}", request.name))?;
        Ok(Station {
            name: request.name.clone(),
        })
    }

    async fn create_app_user(&self, username: &str) -> Result<AppUser> {
        self.record(format!("create_app_user {username}"))?;
        Ok(AppUser {
            username: username.to_string(),
            broker_connection_creds: "token-123".to_string(),
        })
    }

    async fn main_overview(&self) -> Result<MainOverview> {
        self.record("main_overview".to_string())?;
        Ok(MainOverview {
            system_components: vec![
                SystemComponent {
                    component: "memphis-ui".to_string(),
                    actual_pods: Some(1),
                },
                SystemComponent {
                    component: "memphis-broker".to_string(),
                    actual_pods: Some(3),
                },
            ],
        })
    }

    async fn done_next_steps(&self) -> Result<()> {
        self.record("done_next_steps".to_string())
    }

    async fn edit_analytics(&self, send_analytics: bool) -> Result<()> {
        self.record(format!("edit_analytics {send_analytics}"))
    }
}

fn new_app(api: Arc<FakeApi>) -> (GetStartedApp, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let flags = FlagStore::open(dir.path().join("flags.toml")).unwrap();
    let app = GetStartedApp::new(
        &ConsoleConfig::default(),
        api,
        flags,
        ConsoleNavigator::new("http://localhost:9000"),
    );
    (app, dir)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Run an action and apply the completion it produces
async fn perform_and_settle(app: &mut GetStartedApp, action: GetStartedAction) {
    app.perform(action).await;
    let envelope = app.next_message().await.unwrap();
    app.handle_task_message(envelope);
}

async fn create_station(app: &mut GetStartedApp, name: &str) {
    app.dispatch(Action::EditDraft(DraftEdit::Name(name.to_string())));
    let action = app.on_next().expect("valid draft starts creation");
    perform_and_settle(app, action).await;
}

#[tokio::test]
async fn empty_draft_blocks_then_valid_station_advances() {
    let api = Arc::new(FakeApi::default());
    let (mut app, _dir) = new_app(Arc::clone(&api));

    assert!(app.on_next().is_none());
    assert_eq!(app.state().current_step, 1);
    assert!(app.state().next_disabled);
    assert!(app.message.as_ref().is_some_and(|m| m.is_error));

    app.dispatch(Action::EditDraft(DraftEdit::Name("Orders".to_string())));
    let action = app.on_next().expect("creation requested");
    match &action {
        GetStartedAction::CreateStation(request) => {
            assert_eq!(request.name, "orders");
            assert_eq!(request.retention_value, 604_800);
        }
        other => panic!("unexpected action {other:?}"),
    }
    assert!(app.state().is_loading);
    assert!(app.on_next().is_none(), "next is ignored while loading");

    perform_and_settle(&mut app, action).await;

    let state = app.state();
    assert_eq!(state.current_step, 2);
    assert_eq!(state.completed_steps, 1);
    assert_eq!(state.station_name.as_deref(), Some("orders"));
    assert!(!state.is_loading);
    assert!(!state.back_disabled);
    assert!(state.is_hidden_button);
    assert_eq!(app.registered_step(), Some(StepId::CreateAppUser));
    assert_eq!(api.calls(), vec!["create_station orders".to_string()]);
}

fn type_keys(app: &mut GetStartedApp, text: &str) -> Option<GetStartedAction> {
    let mut last = None;
    for c in text.chars() {
        last = app.handle_key(key(KeyCode::Char(c)));
    }
    last
}

#[tokio::test]
async fn fixing_replicas_reenables_next() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));

    app.handle_key(key(KeyCode::Char('i')));
    type_keys(&mut app, "orders");
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.state().next_disabled);

    // Name, retention type, four age fields, storage type, replicas
    for _ in 0..7 {
        app.handle_key(key(KeyCode::Char('j')));
    }
    app.handle_key(key(KeyCode::Char('i')));
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().station_draft.replicas, 0);
    assert!(app.state().next_disabled);

    assert!(app.handle_key(key(KeyCode::Enter)).is_none());
    assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    assert!(!app.state().is_loading);

    app.handle_key(key(KeyCode::Char('i')));
    type_keys(&mut app, "2");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().station_draft.replicas, 2);
    assert!(!app.state().next_disabled);

    match app.handle_key(key(KeyCode::Enter)) {
        Some(GetStartedAction::CreateStation(request)) => assert_eq!(request.replicas, 2),
        other => panic!("unexpected action {other:?}"),
    }
}

#[tokio::test]
async fn disabled_next_does_not_start_creation() {
    let api = Arc::new(FakeApi::default());
    let (mut app, _dir) = new_app(Arc::clone(&api));
    app.dispatch(Action::EditDraft(DraftEdit::Name("orders".to_string())));
    app.dispatch(Action::SetNextDisabled(true));

    assert!(app.on_next().is_none());
    assert!(!app.state().is_loading);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_station_creation_stays_on_first_step() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::failing()));

    create_station(&mut app, "orders").await;

    let state = app.state();
    assert_eq!(state.current_step, 1);
    assert_eq!(state.completed_steps, 0);
    assert_eq!(state.station_name, None);
    assert!(!state.is_loading);
    let message = app.message.as_ref().expect("error shown");
    assert!(message.is_error);
    assert!(message.text.contains("broker unavailable"));
}

#[tokio::test]
async fn returning_to_first_step_does_not_recreate_station() {
    let api = Arc::new(FakeApi::default());
    let (mut app, _dir) = new_app(Arc::clone(&api));

    create_station(&mut app, "orders").await;
    app.on_back();
    assert_eq!(app.state().current_step, 1);
    assert!(app.state().back_disabled);

    assert!(app.on_next().is_none());
    assert_eq!(app.state().current_step, 2);
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn app_user_form_unhides_next() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));
    create_station(&mut app, "orders").await;

    // Next does nothing until the user exists
    assert!(app.on_next().is_none());
    assert_eq!(app.state().current_step, 2);

    app.handle_key(key(KeyCode::Char('i')));
    for c in "Producer1".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    let action = app.handle_key(key(KeyCode::Enter)).expect("user creation requested");
    assert!(matches!(&action, GetStartedAction::CreateAppUser(name) if name == "producer1"));

    perform_and_settle(&mut app, action).await;

    let user = app.created_user().expect("user stored");
    assert_eq!(user.username, "producer1");
    assert_eq!(user.token.as_str(), "token-123");
    assert!(!app.state().is_hidden_button);

    app.on_next();
    assert_eq!(app.state().current_step, 3);
    assert_eq!(app.state().completed_steps, 2);
}

#[tokio::test]
async fn finish_resets_state_sets_flag_and_navigates_to_station() {
    let api = Arc::new(FakeApi::default());
    let (mut app, dir) = new_app(Arc::clone(&api));

    create_station(&mut app, "orders").await;
    app.app_username.set("app");
    let user = app.create_app_user().expect("user creation requested");
    perform_and_settle(&mut app, user).await;

    app.on_next();
    app.on_next();
    app.on_next();
    assert_eq!(app.state().current_step, 5);
    assert_eq!(app.state().completed_steps, 4);

    let action = app.on_next().expect("finish requested");
    assert!(matches!(action, GetStartedAction::Finish));
    app.perform(action).await;

    assert_eq!(app.state(), &WizardState::default());
    assert_eq!(app.navigator().target(), Some("/stations/orders"));
    assert_eq!(
        app.navigator().target_url().as_deref(),
        Some("http://localhost:9000/stations/orders")
    );
    assert!(app.flags().get_bool(Flag::SkipGetStarted));
    assert!(app.should_exit);
    assert!(api.calls().contains(&"done_next_steps".to_string()));

    let reopened = FlagStore::open(dir.path().join("flags.toml")).unwrap();
    assert!(reopened.get_bool(Flag::SkipGetStarted));
}

#[tokio::test]
async fn finish_without_station_goes_to_overview_even_if_broker_fails() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::failing()));

    app.finish().await;

    assert_eq!(app.navigator().target(), Some("/overview"));
    assert!(app.flags().get_bool(Flag::SkipGetStarted));
}

#[tokio::test]
async fn skip_sets_flag_and_navigates_to_overview() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));

    app.perform(GetStartedAction::Skip).await;

    assert!(app.flags().get_bool(Flag::SkipGetStarted));
    assert_eq!(app.navigator().target(), Some("/overview"));
    assert!(app.should_exit);
}

fn at_finish_step(app: &mut GetStartedApp) {
    app.dispatch(Action::SetCompletedSteps(4));
    app.dispatch(Action::SetCurrentStep(5));
}

#[tokio::test]
async fn analytics_toggle_commits_on_success() {
    let api = Arc::new(FakeApi::default());
    let (mut app, _dir) = new_app(Arc::clone(&api));
    at_finish_step(&mut app);
    assert!(!app.allow_analytics());

    let action = app.toggle_analytics().expect("toggle requested");
    assert!(app.toggle_analytics().is_none(), "one request at a time");
    perform_and_settle(&mut app, action).await;

    assert!(app.allow_analytics());
    assert_eq!(app.flags().get(Flag::AllowAnalytics), Some("true"));
    assert_eq!(api.calls(), vec!["edit_analytics true".to_string()]);
}

#[tokio::test]
async fn analytics_toggle_failure_changes_nothing() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::failing()));
    at_finish_step(&mut app);

    let action = app.toggle_analytics().expect("toggle requested");
    perform_and_settle(&mut app, action).await;

    assert!(!app.allow_analytics());
    assert_eq!(app.flags().get(Flag::AllowAnalytics), None);
    // A new attempt is allowed after the failure
    assert!(app.toggle_analytics().is_some());
}

#[tokio::test]
async fn analytics_stays_off_when_flag_cannot_be_written() {
    let api = Arc::new(FakeApi::default());
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let flags = FlagStore::open(blocker.join("flags.toml")).unwrap();
    let mut app = GetStartedApp::new(
        &ConsoleConfig::default(),
        Arc::clone(&api) as Arc<dyn BrokerApi>,
        flags,
        ConsoleNavigator::new("http://localhost:9000"),
    );
    at_finish_step(&mut app);

    let action = app.toggle_analytics().expect("toggle requested");
    perform_and_settle(&mut app, action).await;

    assert_eq!(api.calls(), vec!["edit_analytics true".to_string()]);
    assert!(!app.allow_analytics());
    assert_eq!(app.flags().get(Flag::AllowAnalytics), None);
}

#[tokio::test]
async fn step_change_updates_back_flag_and_slot_only() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));
    app.dispatch(Action::SetNextDisabled(true));

    for target in 1..=5 {
        app.dispatch(Action::SetCurrentStep(target));
        assert_eq!(app.state().current_step, target);
        assert_eq!(app.state().back_disabled, target == 1);
        assert!(app.state().next_disabled);
        assert_eq!(app.registered_step(), StepId::from_number(target));
    }
}

#[tokio::test]
async fn sidebar_only_reaches_next_uncompleted_step() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));

    app.select_step(3);
    assert_eq!(app.state().current_step, 1);

    app.dispatch(Action::SetCompletedSteps(2));
    app.select_step(3);
    assert_eq!(app.state().current_step, 3);

    app.select_step(1);
    assert_eq!(app.state().current_step, 1);
    assert!(app.state().back_disabled);
}

#[tokio::test]
async fn mount_fetches_broker_replicas() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));
    app.mount();
    let envelope = app.next_message().await.unwrap();
    app.handle_task_message(envelope);
    assert_eq!(app.state().actual_pods, Some(3));
}

#[tokio::test]
async fn failed_replica_fetch_is_silent() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::failing()));
    app.mount();
    let envelope = app.next_message().await.unwrap();
    app.handle_task_message(envelope);
    assert_eq!(app.state().actual_pods, None);
    assert!(app.message.is_none());
}

#[tokio::test]
async fn results_from_torn_down_wizard_are_ignored() {
    let (mut app, _dir) = new_app(Arc::new(FakeApi::default()));
    let stale_generation = app.generation();

    app.skip();
    assert_eq!(app.generation(), stale_generation + 1);

    app.handle_task_message(TaskEnvelope {
        generation: stale_generation,
        message: TaskMessage::StationCreated(Ok(Station {
            name: "late".to_string(),
        })),
    });

    assert_eq!(app.state().station_name, None);
    assert_eq!(app.state().current_step, 1);
}
