use super::GetStartedApp;
use super::GetStartedAction;
use super::steps::StepId;

/// What a step does when "Next" is pressed
pub type NextHandler = fn(&mut GetStartedApp) -> Option<GetStartedAction>;

/// Holds the handler of whichever step is mounted. Only one step is mounted
/// at a time, so registering replaces the previous handler.
#[derive(Default)]
pub struct NextSlot {
    registered: Option<(StepId, NextHandler)>,
}

impl NextSlot {
    pub fn register(&mut self, step: StepId, handler: NextHandler) {
        self.registered = Some((step, handler));
    }

    pub fn clear(&mut self) {
        self.registered = None;
    }

    pub fn step(&self) -> Option<StepId> {
        self.registered.map(|(step, _)| step)
    }

    pub fn handler(&self) -> Option<NextHandler> {
        self.registered.map(|(_, handler)| handler)
    }
}
