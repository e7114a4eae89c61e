//! What "Next" does on each step. The container only knows the slot; these
//! functions carry the step semantics.

use super::slot::NextHandler;
use super::state::Action;
use super::steps::StepId;
use super::{GetStartedAction, GetStartedApp};

pub fn handler_for(step: StepId) -> NextHandler {
    match step {
        StepId::CreateStation => create_station_next,
        StepId::CreateAppUser => create_app_user_next,
        StepId::ProduceData | StepId::ConsumeData => code_step_next,
        StepId::Finish => finish_next,
    }
}

fn create_station_next(app: &mut GetStartedApp) -> Option<GetStartedAction> {
    let request = match app.state().station_draft.to_request() {
        Ok(request) => request,
        Err(e) => {
            app.dispatch(Action::SetNextDisabled(true));
            app.set_error(e.to_string());
            return None;
        }
    };

    // Coming back to step 1 after the station exists must not create it twice
    if app.state().station_name.as_deref() == Some(request.name.as_str()) {
        app.complete_step(StepId::CreateStation);
        return None;
    }

    app.dispatch(Action::SetNextDisabled(false));
    app.dispatch(Action::SetLoading(true));
    Some(GetStartedAction::CreateStation(request))
}

fn create_app_user_next(app: &mut GetStartedApp) -> Option<GetStartedAction> {
    if app.created_user().is_some() {
        app.complete_step(StepId::CreateAppUser);
    }
    None
}

fn code_step_next(app: &mut GetStartedApp) -> Option<GetStartedAction> {
    if let Some(step) = StepId::from_number(app.state().current_step) {
        app.complete_step(step);
    }
    None
}

fn finish_next(_app: &mut GetStartedApp) -> Option<GetStartedAction> {
    Some(GetStartedAction::Finish)
}
