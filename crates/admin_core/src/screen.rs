//! One admin page's worth of state: the (collection, session) pair plus
//! the live search query, driven entirely by user intents.

use std::sync::Arc;

use shared::error::DraftError;
use tracing::warn;

use crate::{
    filter::filter_by_name,
    record::EntityRecord,
    session::SessionState,
    store::EntityStore,
};

/// Everything the presentation layer can ask a screen to do. Mirrors the
/// intent surface one-to-one; `Screen::apply` is the single dispatch point
/// for callers that prefer a reducer shape over direct method calls.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent<R: EntityRecord> {
    OpenCreate,
    CommitCreate,
    StartEdit(R::Id),
    EditField(R::Field, String),
    SaveEdit,
    CancelEdit,
    DeleteRecord(R::Id),
    SetSearchQuery(String),
}

/// Owns one [`EntityStore`] and one [`SessionState`]; the presentation
/// layer never mutates either directly. Two admin pages are two `Screen`
/// instances, so sessions on different kinds never interfere.
#[derive(Debug, Clone)]
pub struct Screen<R: EntityRecord> {
    store: EntityStore<R>,
    session: SessionState<R>,
    search_query: String,
}

impl<R: EntityRecord> Screen<R> {
    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            store: EntityStore::seed(records),
            session: SessionState::Idle,
            search_query: String::new(),
        }
    }

    /// Reducer-style entry point; equivalent to calling the intent's
    /// method directly.
    pub fn apply(&mut self, intent: ScreenIntent<R>) -> Result<(), DraftError> {
        match intent {
            ScreenIntent::OpenCreate => self.open_create(),
            ScreenIntent::CommitCreate => return self.commit_create(),
            ScreenIntent::StartEdit(id) => self.start_edit(id),
            ScreenIntent::EditField(field, value) => self.edit_field(field, value),
            ScreenIntent::SaveEdit => return self.save_edit(),
            ScreenIntent::CancelEdit => self.cancel_edit(),
            ScreenIntent::DeleteRecord(id) => self.delete_record(id),
            ScreenIntent::SetSearchQuery(text) => self.set_search_query(text),
        }
        Ok(())
    }

    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    /// Commits the creation draft. On validation failure the session stays
    /// in `Creating` with the draft intact, so rejected input is reported
    /// rather than silently discarded. No-op outside `Creating`.
    pub fn commit_create(&mut self) -> Result<(), DraftError> {
        let SessionState::Creating(draft) = &self.session else {
            return Ok(());
        };
        self.store.create(draft)?;
        self.session = SessionState::Idle;
        Ok(())
    }

    /// Opens an edit session as a full copy of the targeted record; a
    /// missing id is ignored. Replaces any session already live.
    pub fn start_edit(&mut self, id: R::Id) {
        match self.store.get(id) {
            Some(record) => {
                let record = record.clone();
                self.session.start_edit(&record);
            }
            None => warn!(kind = R::KIND, %id, "edit targeted a missing record; ignoring"),
        }
    }

    pub fn edit_field(&mut self, field: R::Field, value: String) {
        self.session.edit_field(field, value);
    }

    /// Saves the edit draft back over its record. The draft is validated
    /// like a creation draft; on failure the session stays live and the
    /// error is returned. If the record was deleted underneath the session
    /// the save is a benign no-op and the session still closes.
    pub fn save_edit(&mut self) -> Result<(), DraftError> {
        let SessionState::Editing { id, draft } = &self.session else {
            return Ok(());
        };
        R::validate_draft(draft)?;
        let record = R::from_draft(*id, draft);
        self.store.update(*id, record);
        self.session = SessionState::Idle;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Deletes the record; idempotent. A live session is left alone; a
    /// session editing the deleted record resolves as a no-op on save.
    pub fn delete_record(&mut self, id: R::Id) {
        self.store.delete(id);
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// The filtered view the presentation layer renders.
    pub fn visible_records(&self) -> Vec<R> {
        filter_by_name(&self.store.query(), &self.search_query)
    }

    /// Unfiltered collection snapshot, insertion order preserved.
    pub fn records(&self) -> Arc<Vec<R>> {
        self.store.query()
    }

    pub fn session(&self) -> &SessionState<R> {
        &self.session
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
