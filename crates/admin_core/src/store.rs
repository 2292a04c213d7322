//! Authoritative in-memory record collection, one instance per kind.

use std::sync::Arc;

use shared::error::DraftError;
use tracing::{debug, warn};

use crate::record::EntityRecord;

/// Owns the insertion-ordered collection for one record kind and the
/// monotonic id allocator. The collection is exposed only as an immutable
/// snapshot; every mutation swaps in a fresh `Arc`, so observers can detect
/// change with `Arc::ptr_eq`.
#[derive(Debug, Clone)]
pub struct EntityStore<R: EntityRecord> {
    records: Arc<Vec<R>>,
    next_id: u64,
}

impl<R: EntityRecord> EntityStore<R> {
    /// Builds a store from fixed sample data. The allocator starts above
    /// the highest seeded id so seeded and created ids never collide.
    pub fn seed(records: Vec<R>) -> Self {
        let next_id = records
            .iter()
            .map(|record| record.id().into())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            records: Arc::new(records),
            next_id,
        }
    }

    /// Validates the draft and appends a new record in insertion order.
    /// Ids come from a counter that only ever moves forward, so an id is
    /// never reused after a deletion. On validation failure the collection
    /// is untouched and the error is returned to the caller.
    pub fn create(&mut self, draft: &R::Draft) -> Result<R::Id, DraftError> {
        R::validate_draft(draft)?;
        let id = R::Id::from(self.next_id);
        self.next_id += 1;
        let mut records = self.records.as_ref().clone();
        records.push(R::from_draft(id, draft));
        self.records = Arc::new(records);
        debug!(kind = R::KIND, %id, "record created");
        Ok(id)
    }

    /// Wholesale replacement of the record with this id; the caller
    /// supplies the full modified record, not a partial diff. A missing id
    /// is a benign no-op (stale UI intents race against deletions and must
    /// not fault), as is a record whose own id disagrees with `id`.
    pub fn update(&mut self, id: R::Id, record: R) -> bool {
        if record.id() != id {
            warn!(kind = R::KIND, %id, "update carried a mismatched record id; ignoring");
            return false;
        }
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            warn!(kind = R::KIND, %id, "update targeted a missing record; ignoring");
            return false;
        };
        let mut records = self.records.as_ref().clone();
        records[position] = record;
        self.records = Arc::new(records);
        debug!(kind = R::KIND, %id, "record updated");
        true
    }

    /// Removes the record with this id if present; idempotent.
    pub fn delete(&mut self, id: R::Id) -> bool {
        if !self.records.iter().any(|r| r.id() == id) {
            debug!(kind = R::KIND, %id, "delete targeted a missing record; ignoring");
            return false;
        }
        let mut records = self.records.as_ref().clone();
        records.retain(|r| r.id() != id);
        self.records = Arc::new(records);
        debug!(kind = R::KIND, %id, "record deleted");
        true
    }

    /// Current collection snapshot, insertion order preserved.
    pub fn query(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}
