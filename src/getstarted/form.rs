//! Text buffers behind the create-station form. The draft in `WizardState`
//! stays authoritative; buffers only hold what is being typed.

use crate::api::RetentionType;
use crate::input::InputBuffer;

use super::state::{DraftEdit, StationDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationField {
    Name,
    RetentionType,
    Days,
    Hours,
    Minutes,
    Seconds,
    RetentionSize,
    RetentionMessages,
    StorageType,
    Replicas,
}

impl StationField {
    pub fn label(&self) -> &'static str {
        match self {
            StationField::Name => "Station name",
            StationField::RetentionType => "Retention type",
            StationField::Days => "Days",
            StationField::Hours => "Hours",
            StationField::Minutes => "Minutes",
            StationField::Seconds => "Seconds",
            StationField::RetentionSize => "Size (bytes)",
            StationField::RetentionMessages => "Messages",
            StationField::StorageType => "Storage type",
            StationField::Replicas => "Replicas",
        }
    }

    /// Selectors cycle with space/h/l instead of taking text
    pub fn is_selector(&self) -> bool {
        matches!(self, StationField::RetentionType | StationField::StorageType)
    }
}

/// Fields shown for a retention type, in display order
pub fn visible_fields(retention: RetentionType) -> Vec<StationField> {
    let mut fields = vec![StationField::Name, StationField::RetentionType];
    match retention {
        RetentionType::MessageAge => fields.extend([
            StationField::Days,
            StationField::Hours,
            StationField::Minutes,
            StationField::Seconds,
        ]),
        RetentionType::Size => fields.push(StationField::RetentionSize),
        RetentionType::Messages => fields.push(StationField::RetentionMessages),
    }
    fields.extend([StationField::StorageType, StationField::Replicas]);
    fields
}

pub struct StationForm {
    pub focus: StationField,
    pub name: InputBuffer,
    pub days: InputBuffer,
    pub hours: InputBuffer,
    pub minutes: InputBuffer,
    pub seconds: InputBuffer,
    pub retention_size: InputBuffer,
    pub retention_messages: InputBuffer,
    pub replicas: InputBuffer,
}

impl StationForm {
    pub fn from_draft(draft: &StationDraft) -> Self {
        let numeric = |value: u64| InputBuffer::numeric().with_value(&value.to_string());
        Self {
            focus: StationField::Name,
            name: InputBuffer::new().with_value(&draft.name),
            days: numeric(draft.days.into()),
            hours: numeric(draft.hours.into()),
            minutes: numeric(draft.minutes.into()),
            seconds: numeric(draft.seconds.into()),
            retention_size: numeric(draft.retention_size),
            retention_messages: numeric(draft.retention_messages),
            replicas: numeric(draft.replicas.into()),
        }
    }

    pub fn buffer(&self, field: StationField) -> Option<&InputBuffer> {
        match field {
            StationField::Name => Some(&self.name),
            StationField::Days => Some(&self.days),
            StationField::Hours => Some(&self.hours),
            StationField::Minutes => Some(&self.minutes),
            StationField::Seconds => Some(&self.seconds),
            StationField::RetentionSize => Some(&self.retention_size),
            StationField::RetentionMessages => Some(&self.retention_messages),
            StationField::Replicas => Some(&self.replicas),
            StationField::RetentionType | StationField::StorageType => None,
        }
    }

    pub fn focused_buffer_mut(&mut self) -> Option<&mut InputBuffer> {
        match self.focus {
            StationField::Name => Some(&mut self.name),
            StationField::Days => Some(&mut self.days),
            StationField::Hours => Some(&mut self.hours),
            StationField::Minutes => Some(&mut self.minutes),
            StationField::Seconds => Some(&mut self.seconds),
            StationField::RetentionSize => Some(&mut self.retention_size),
            StationField::RetentionMessages => Some(&mut self.retention_messages),
            StationField::Replicas => Some(&mut self.replicas),
            StationField::RetentionType | StationField::StorageType => None,
        }
    }

    /// The draft edit matching the focused buffer's current text
    pub fn edit_for_focus(&self) -> Option<DraftEdit> {
        let as_u32 = |buffer: &InputBuffer| u32::try_from(buffer.as_u64()).unwrap_or(u32::MAX);
        let edit = match self.focus {
            StationField::Name => DraftEdit::Name(self.name.content().to_string()),
            StationField::Days => DraftEdit::Days(as_u32(&self.days)),
            StationField::Hours => DraftEdit::Hours(as_u32(&self.hours)),
            StationField::Minutes => DraftEdit::Minutes(as_u32(&self.minutes)),
            StationField::Seconds => DraftEdit::Seconds(as_u32(&self.seconds)),
            StationField::RetentionSize => DraftEdit::RetentionSize(self.retention_size.as_u64()),
            StationField::RetentionMessages => {
                DraftEdit::RetentionMessages(self.retention_messages.as_u64())
            }
            StationField::Replicas => DraftEdit::Replicas(as_u32(&self.replicas)),
            StationField::RetentionType | StationField::StorageType => return None,
        };
        Some(edit)
    }

    pub fn focus_next(&mut self, retention: RetentionType) {
        let fields = visible_fields(retention);
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1).min(fields.len() - 1)];
    }

    pub fn focus_prev(&mut self, retention: RetentionType) {
        let fields = visible_fields(retention);
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[idx.saturating_sub(1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_retention_type() {
        assert!(visible_fields(RetentionType::MessageAge).contains(&StationField::Seconds));
        assert!(!visible_fields(RetentionType::MessageAge).contains(&StationField::RetentionSize));
        assert!(visible_fields(RetentionType::Size).contains(&StationField::RetentionSize));
        assert_eq!(visible_fields(RetentionType::Messages).len(), 5);
    }

    #[test]
    fn buffers_start_from_draft() {
        let form = StationForm::from_draft(&StationDraft::default());
        assert_eq!(form.days.content(), "7");
        assert_eq!(form.replicas.content(), "1");
        assert!(form.name.is_empty());
    }

    #[test]
    fn focus_clamps_at_both_ends() {
        let mut form = StationForm::from_draft(&StationDraft::default());
        form.focus_prev(RetentionType::Size);
        assert_eq!(form.focus, StationField::Name);
        for _ in 0..10 {
            form.focus_next(RetentionType::Size);
        }
        assert_eq!(form.focus, StationField::Replicas);
    }

    #[test]
    fn edit_reflects_buffer_text() {
        let mut form = StationForm::from_draft(&StationDraft::default());
        form.focus = StationField::Hours;
        if let Some(buffer) = form.focused_buffer_mut() {
            buffer.set("12");
        }
        assert_eq!(form.edit_for_focus(), Some(DraftEdit::Hours(12)));

        form.focus = StationField::StorageType;
        assert_eq!(form.edit_for_focus(), None);
    }
}
