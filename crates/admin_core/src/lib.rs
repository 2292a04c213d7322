//! In-memory state model for the coordination platform admin console.
//!
//! One generic implementation, instantiated once per admin page: an
//! [`EntityStore`] owning the authoritative record collection, a pure
//! name filter deriving the visible subsequence from the live search
//! query, and a [`SessionState`] coordinating the create/edit draft
//! lifecycle. A [`Screen`] ties the three together and is the only
//! surface the presentation layer talks to: it dispatches intents in
//! and reads immutable snapshots out. Everything is synchronous; each
//! intent runs to completion before the next one is accepted.

pub mod filter;
pub mod record;
pub mod reports;
pub mod screen;
pub mod seed;
pub mod session;
pub mod store;

pub use filter::filter_by_name;
pub use record::{EntityRecord, OrganizationField, VolunteerField};
pub use reports::{OrgReport, ReportsCatalog, ALL_REPORTS_LABEL, TOP_SKILL_LABELS};
pub use screen::{Screen, ScreenIntent};
pub use session::SessionState;
pub use store::EntityStore;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
