//! Wizard state and its pure transition function.

use crate::api::{RetentionType, StationRequest, StorageType};
use crate::error::{ConsoleError, Result};

use super::steps::FIRST_STEP;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

const MAX_STATION_NAME_LEN: usize = 128;
const MAX_USERNAME_LEN: usize = 32;

/// Fields staged on step 1 before the station is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDraft {
    pub name: String,
    pub retention_type: RetentionType,
    /// Derived from the sub-fields for the current retention type
    pub retention_value: u64,
    pub storage_type: StorageType,
    pub replicas: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Bytes, used when retention is by size
    pub retention_size: u64,
    /// Count, used when retention is by messages
    pub retention_messages: u64,
}

impl Default for StationDraft {
    fn default() -> Self {
        let mut draft = Self {
            name: String::new(),
            retention_type: RetentionType::MessageAge,
            retention_value: 0,
            storage_type: StorageType::File,
            replicas: 1,
            days: 7,
            hours: 0,
            minutes: 0,
            seconds: 0,
            retention_size: 1000,
            retention_messages: 10,
        };
        draft.retention_value = draft.computed_retention_value();
        draft
    }
}

impl StationDraft {
    pub fn computed_retention_value(&self) -> u64 {
        match self.retention_type {
            RetentionType::MessageAge => {
                u64::from(self.days) * SECONDS_PER_DAY
                    + u64::from(self.hours) * SECONDS_PER_HOUR
                    + u64::from(self.minutes) * SECONDS_PER_MINUTE
                    + u64::from(self.seconds)
            }
            RetentionType::Size => self.retention_size,
            RetentionType::Messages => self.retention_messages,
        }
    }

    /// Validate the draft and build the creation request
    pub fn to_request(&self) -> Result<StationRequest> {
        let name = validate_station_name(&self.name)?;

        if self.replicas == 0 {
            return Err(ConsoleError::InvalidStation(
                "Replicas must be at least 1".to_string(),
            ));
        }

        let retention_value = self.computed_retention_value();
        if retention_value == 0 {
            return Err(ConsoleError::InvalidStation(
                "Retention value must be greater than 0".to_string(),
            ));
        }

        Ok(StationRequest {
            name,
            retention_type: self.retention_type,
            retention_value,
            storage_type: self.storage_type,
            replicas: self.replicas,
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

/// Station names are lowercased, then must be 1-128 characters of
/// `a-z 0-9 _ - .` and must not start or end with a separator.
pub fn validate_station_name(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();

    if name.is_empty() {
        return Err(ConsoleError::InvalidStation("Station name is required".to_string()));
    }
    if name.chars().count() > MAX_STATION_NAME_LEN {
        return Err(ConsoleError::InvalidStation(format!(
            "Station name must be {MAX_STATION_NAME_LEN} characters or less"
        )));
    }
    if !name.chars().all(is_name_char) {
        return Err(ConsoleError::InvalidStation(
            "Station name can only contain letters, numbers, '_', '-' and '.'".to_string(),
        ));
    }
    let separator = |c: char| matches!(c, '_' | '-' | '.');
    if name.starts_with(separator) || name.ends_with(separator) {
        return Err(ConsoleError::InvalidStation(
            "Station name cannot start or end with '_', '-' or '.'".to_string(),
        ));
    }

    Ok(name)
}

pub fn validate_username(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();

    if name.is_empty() {
        return Err(ConsoleError::InvalidUser("Username is required".to_string()));
    }
    if name.chars().count() > MAX_USERNAME_LEN {
        return Err(ConsoleError::InvalidUser(format!(
            "Username must be {MAX_USERNAME_LEN} characters or less"
        )));
    }
    if !name.chars().all(is_name_char) {
        return Err(ConsoleError::InvalidUser(
            "Username can only contain letters, numbers, '_', '-' and '.'".to_string(),
        ));
    }

    Ok(name)
}

/// Everything the wizard container tracks across steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: u8,
    pub completed_steps: u8,
    pub station_draft: StationDraft,
    /// Station created on step 1
    pub station_name: Option<String>,
    pub next_disabled: bool,
    pub back_disabled: bool,
    pub is_loading: bool,
    pub is_hidden_button: bool,
    /// Running broker replicas, display only
    pub actual_pods: Option<u32>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: FIRST_STEP,
            completed_steps: 0,
            station_draft: StationDraft::default(),
            station_name: None,
            next_disabled: false,
            back_disabled: true,
            is_loading: false,
            is_hidden_button: false,
            actual_pods: None,
        }
    }
}

/// Partial state merged over the initial value by `Action::InitialState`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardPatch {
    pub current_step: Option<u8>,
    pub completed_steps: Option<u8>,
    pub station_draft: Option<StationDraft>,
    pub station_name: Option<String>,
    pub next_disabled: Option<bool>,
    pub back_disabled: Option<bool>,
    pub is_loading: Option<bool>,
    pub is_hidden_button: Option<bool>,
    pub actual_pods: Option<u32>,
}

/// A single typed edit of the station draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    RetentionType(RetentionType),
    Days(u32),
    Hours(u32),
    Minutes(u32),
    Seconds(u32),
    RetentionSize(u64),
    RetentionMessages(u64),
    StorageType(StorageType),
    Replicas(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Unvalidated; callers supply 1..=5
    SetCurrentStep(u8),
    SetCompletedSteps(u8),
    SetBackDisabled(bool),
    SetNextDisabled(bool),
    SetLoading(bool),
    SetHiddenButton(bool),
    SetActualPods(Option<u32>),
    SetStationName(String),
    EditDraft(DraftEdit),
    InitialState(WizardPatch),
}

pub fn reduce(state: WizardState, action: Action) -> WizardState {
    match action {
        Action::SetCurrentStep(current_step) => WizardState {
            current_step,
            ..state
        },
        Action::SetCompletedSteps(completed_steps) => WizardState {
            completed_steps,
            ..state
        },
        Action::SetBackDisabled(back_disabled) => WizardState {
            back_disabled,
            ..state
        },
        Action::SetNextDisabled(next_disabled) => WizardState {
            next_disabled,
            ..state
        },
        Action::SetLoading(is_loading) => WizardState { is_loading, ..state },
        Action::SetHiddenButton(is_hidden_button) => WizardState {
            is_hidden_button,
            ..state
        },
        Action::SetActualPods(actual_pods) => WizardState {
            actual_pods,
            ..state
        },
        Action::SetStationName(name) => WizardState {
            station_name: Some(name),
            ..state
        },
        Action::EditDraft(edit) => WizardState {
            station_draft: apply_edit(state.station_draft, edit),
            ..state
        },
        Action::InitialState(patch) => {
            let initial = WizardState::default();
            WizardState {
                current_step: patch.current_step.unwrap_or(initial.current_step),
                completed_steps: patch.completed_steps.unwrap_or(initial.completed_steps),
                station_draft: patch.station_draft.unwrap_or(initial.station_draft),
                station_name: patch.station_name.or(initial.station_name),
                next_disabled: patch.next_disabled.unwrap_or(initial.next_disabled),
                back_disabled: patch.back_disabled.unwrap_or(initial.back_disabled),
                is_loading: patch.is_loading.unwrap_or(initial.is_loading),
                is_hidden_button: patch.is_hidden_button.unwrap_or(initial.is_hidden_button),
                actual_pods: patch.actual_pods.or(initial.actual_pods),
            }
        }
    }
}

fn apply_edit(mut draft: StationDraft, edit: DraftEdit) -> StationDraft {
    match edit {
        DraftEdit::Name(name) => draft.name = name,
        DraftEdit::RetentionType(kind) => draft.retention_type = kind,
        DraftEdit::Days(days) => draft.days = days,
        DraftEdit::Hours(hours) => draft.hours = hours,
        DraftEdit::Minutes(minutes) => draft.minutes = minutes,
        DraftEdit::Seconds(seconds) => draft.seconds = seconds,
        DraftEdit::RetentionSize(bytes) => draft.retention_size = bytes,
        DraftEdit::RetentionMessages(count) => draft.retention_messages = count,
        DraftEdit::StorageType(kind) => draft.storage_type = kind,
        DraftEdit::Replicas(replicas) => draft.replicas = replicas,
    }
    draft.retention_value = draft.computed_retention_value();
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn busy_state() -> WizardState {
        let mut state = WizardState::default();
        for action in [
            Action::SetCurrentStep(4),
            Action::SetCompletedSteps(3),
            Action::SetStationName("orders".to_string()),
            Action::EditDraft(DraftEdit::Name("orders".to_string())),
            Action::EditDraft(DraftEdit::RetentionType(RetentionType::Messages)),
            Action::SetLoading(true),
            Action::SetHiddenButton(true),
            Action::SetNextDisabled(true),
            Action::SetBackDisabled(false),
            Action::SetActualPods(Some(3)),
        ] {
            state = reduce(state, action);
        }
        state
    }

    #[test]
    fn initial_draft_matches_documented_defaults() {
        let draft = StationDraft::default();
        assert_eq!(draft.retention_type, RetentionType::MessageAge);
        assert_eq!(draft.retention_value, 604_800);
        assert_eq!(draft.storage_type, StorageType::File);
        assert_eq!(draft.replicas, 1);
        assert_eq!((draft.days, draft.hours, draft.minutes, draft.seconds), (7, 0, 0, 0));
        assert_eq!(draft.retention_size, 1000);
        assert_eq!(draft.retention_messages, 10);
    }

    #[test]
    fn set_current_step_is_unconditional() {
        for target in 1..=5 {
            let state = reduce(busy_state(), Action::SetCurrentStep(target));
            assert_eq!(state.current_step, target);
            assert!(state.next_disabled, "next_disabled must not follow the step");
        }
        // Range is the caller's job
        assert_eq!(reduce(WizardState::default(), Action::SetCurrentStep(0)).current_step, 0);
    }

    #[test]
    fn initial_state_resets_everything() {
        let state = reduce(busy_state(), Action::InitialState(WizardPatch::default()));
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn initial_state_merges_patch() {
        let patch = WizardPatch {
            current_step: Some(3),
            actual_pods: Some(2),
            ..WizardPatch::default()
        };
        let state = reduce(busy_state(), Action::InitialState(patch));
        assert_eq!(state.current_step, 3);
        assert_eq!(state.actual_pods, Some(2));
        assert_eq!(state.completed_steps, 0);
        assert_eq!(state.station_name, None);
    }

    #[test]
    fn set_actual_pods_touches_nothing_else() {
        let before = busy_state();
        let after = reduce(before.clone(), Action::SetActualPods(Some(7)));
        assert_eq!(after.actual_pods, Some(7));
        assert_eq!(
            WizardState {
                actual_pods: before.actual_pods,
                ..after
            },
            before
        );
    }

    #[test]
    fn draft_edits_recompute_retention_value() {
        let mut state = WizardState::default();
        state = reduce(state, Action::EditDraft(DraftEdit::Days(1)));
        state = reduce(state, Action::EditDraft(DraftEdit::Hours(2)));
        state = reduce(state, Action::EditDraft(DraftEdit::Minutes(3)));
        state = reduce(state, Action::EditDraft(DraftEdit::Seconds(4)));
        assert_eq!(state.station_draft.retention_value, 86_400 + 7_200 + 180 + 4);

        state = reduce(state, Action::EditDraft(DraftEdit::RetentionType(RetentionType::Size)));
        assert_eq!(state.station_draft.retention_value, 1000);

        state = reduce(state, Action::EditDraft(DraftEdit::RetentionType(RetentionType::Messages)));
        state = reduce(state, Action::EditDraft(DraftEdit::RetentionMessages(250)));
        assert_eq!(state.station_draft.retention_value, 250);
    }

    #[test]
    fn draft_request_lowercases_name() {
        let draft = StationDraft {
            name: "Orders".to_string(),
            ..StationDraft::default()
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.name, "orders");
        assert_eq!(request.retention_value, 604_800);
    }

    #[test]
    fn draft_rejects_zero_retention_and_replicas() {
        let zero_age = StationDraft {
            name: "orders".to_string(),
            days: 0,
            ..StationDraft::default()
        };
        assert!(matches!(zero_age.to_request(), Err(ConsoleError::InvalidStation(_))));

        let no_replicas = StationDraft {
            name: "orders".to_string(),
            replicas: 0,
            ..StationDraft::default()
        };
        assert!(matches!(no_replicas.to_request(), Err(ConsoleError::InvalidStation(_))));
    }

    #[test]
    fn station_name_rules() {
        assert!(validate_station_name("").is_err());
        assert!(validate_station_name("   ").is_err());
        assert!(validate_station_name("has space").is_err());
        assert!(validate_station_name("-leading").is_err());
        assert!(validate_station_name("trailing.").is_err());
        assert!(validate_station_name(&"a".repeat(129)).is_err());
        assert_eq!(validate_station_name("Sensor_Data-1.v2").unwrap(), "sensor_data-1.v2");
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("").is_err());
        assert!(validate_username(&"u".repeat(33)).is_err());
        assert!(validate_username("bad/name").is_err());
        assert_eq!(validate_username("Producer_App").unwrap(), "producer_app");
    }
}
