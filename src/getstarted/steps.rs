pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

/// The five get-started steps, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    CreateStation,
    CreateAppUser,
    ProduceData,
    ConsumeData,
    Finish,
}

impl StepId {
    pub const ALL: [StepId; 5] = [
        StepId::CreateStation,
        StepId::CreateAppUser,
        StepId::ProduceData,
        StepId::ConsumeData,
        StepId::Finish,
    ];

    pub fn number(&self) -> u8 {
        match self {
            StepId::CreateStation => 1,
            StepId::CreateAppUser => 2,
            StepId::ProduceData => 3,
            StepId::ConsumeData => 4,
            StepId::Finish => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Sidebar label
    pub fn name(&self) -> &'static str {
        match self {
            StepId::CreateStation => "Create Station",
            StepId::CreateAppUser => "Create App user",
            StepId::ProduceData => "Produce data",
            StepId::ConsumeData => "Consume data",
            StepId::Finish => "Finish",
        }
    }

    /// Heading of the step panel
    pub fn title(&self) -> &'static str {
        match self {
            StepId::CreateStation => "Create Station",
            StepId::CreateAppUser => "Create user",
            StepId::ProduceData => "Produce data",
            StepId::ConsumeData => "Consume data",
            StepId::Finish => "You are ready to roll",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepId::CreateStation => "A station is a distributed unit that stores the produced data",
            StepId::CreateAppUser => {
                "Each producer/consumer has to have a username and a connection-token"
            }
            StepId::ProduceData => {
                "A producer is the source application/service that pushes data or messages to the broker or station"
            }
            StepId::ConsumeData => {
                "A consumer is the application/service that consume data or messages from the broker or station"
            }
            StepId::Finish => "Congratulations - You've created your first broker app",
        }
    }
}

/// How a step is shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Available,
    Locked,
}

impl StepStatus {
    pub fn of(step: StepId, current_step: u8, completed_steps: u8) -> Self {
        let number = step.number();
        if number == current_step {
            StepStatus::Current
        } else if number <= completed_steps {
            StepStatus::Completed
        } else if number == completed_steps + 1 {
            StepStatus::Available
        } else {
            StepStatus::Locked
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            StepStatus::Completed => "[x]",
            StepStatus::Current => "[>]",
            StepStatus::Available => "[ ]",
            StepStatus::Locked => "[#]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for step in StepId::ALL {
            assert_eq!(StepId::from_number(step.number()), Some(step));
        }
        assert_eq!(StepId::from_number(0), None);
        assert_eq!(StepId::from_number(6), None);
    }

    #[test]
    fn status_reflects_progress() {
        assert_eq!(StepStatus::of(StepId::CreateStation, 2, 1), StepStatus::Completed);
        assert_eq!(StepStatus::of(StepId::CreateAppUser, 2, 1), StepStatus::Current);
        assert_eq!(StepStatus::of(StepId::ProduceData, 1, 2), StepStatus::Available);
        assert_eq!(StepStatus::of(StepId::Finish, 2, 1), StepStatus::Locked);
    }
}
