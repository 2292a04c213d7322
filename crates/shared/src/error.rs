use thiserror::Error;

/// Validation outcome for create/save submissions. Presence checks only;
/// a draft missing a required field is rejected with the collection left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,
    #[error("{field} is required")]
    MissingField { field: &'static str },
}
