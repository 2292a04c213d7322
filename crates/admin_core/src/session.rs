//! Edit session state machine: which draft, if any, is live on a screen.

use tracing::debug;

use crate::record::EntityRecord;

/// At most one draft is live per screen. `Creating` holds an uncommitted
/// creation draft; `Editing` holds a full copy of one existing record,
/// mutated field-by-field until saved or cancelled. Field edits never touch
/// the collection; commit/save/cancel resolve fully before the next intent.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<R: EntityRecord> {
    Idle,
    Creating(R::Draft),
    Editing { id: R::Id, draft: R::Draft },
}

impl<R: EntityRecord> SessionState<R> {
    /// Enters `Creating` with an empty draft. Starting a new session while
    /// another is live replaces it (last-writer-wins on session start).
    pub fn open_create(&mut self) {
        debug!(kind = R::KIND, "creation session opened");
        *self = Self::Creating(R::Draft::default());
    }

    /// Enters `Editing` with a full copy of `record` in edit-source form.
    pub fn start_edit(&mut self, record: &R) {
        debug!(kind = R::KIND, id = %record.id(), "edit session opened");
        *self = Self::Editing {
            id: record.id(),
            draft: record.to_draft(),
        };
    }

    /// Applies one field edit to the live draft; ignored when idle.
    pub fn edit_field(&mut self, field: R::Field, value: String) {
        match self {
            Self::Creating(draft) | Self::Editing { draft, .. } => {
                R::apply_field(draft, field, value);
            }
            Self::Idle => {
                debug!(kind = R::KIND, ?field, "field edit ignored outside a live session");
            }
        }
    }

    /// Discards the live draft without touching the store.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            debug!(kind = R::KIND, "session cancelled, draft discarded");
        }
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match self {
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    pub fn editing_id(&self) -> Option<R::Id> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }
}
