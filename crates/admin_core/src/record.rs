//! The seam between the generic state model and the two record kinds.

use std::fmt;

use shared::{
    domain::{
        join_skills, parse_skills, Organization, OrganizationDraft, Volunteer, VolunteerDraft,
        OrganizationId, VolunteerId,
    },
    error::DraftError,
};

/// A record kind the admin console manages. Implementations supply the
/// draft shape, the presence checks run at commit time, and the mapping
/// between stored records and their edit-source drafts.
pub trait EntityRecord: Clone {
    type Id: Copy + Eq + From<u64> + Into<u64> + fmt::Display + fmt::Debug;
    type Draft: Default + Clone + PartialEq + fmt::Debug;
    type Field: Copy + PartialEq + fmt::Debug;

    /// Lowercase label used in log events.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;

    /// Builds the full record from a draft. The id is assigned by the
    /// store and is immutable afterwards.
    fn from_draft(id: Self::Id, draft: &Self::Draft) -> Self;

    /// The edit-source form of an existing record (skills re-joined with
    /// `", "`, etc.), used to open an edit session as a full copy.
    fn to_draft(&self) -> Self::Draft;

    /// Presence checks on the raw draft, before any parsing.
    fn validate_draft(draft: &Self::Draft) -> Result<(), DraftError>;

    /// Applies one field-level edit to a live draft.
    fn apply_field(draft: &mut Self::Draft, field: Self::Field, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationField {
    Name,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolunteerField {
    Name,
    Skills,
}

impl EntityRecord for Organization {
    type Id = OrganizationId;
    type Draft = OrganizationDraft;
    type Field = OrganizationField;

    const KIND: &'static str = "organization";

    fn id(&self) -> OrganizationId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: OrganizationId, draft: &OrganizationDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
        }
    }

    fn to_draft(&self) -> OrganizationDraft {
        OrganizationDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn validate_draft(draft: &OrganizationDraft) -> Result<(), DraftError> {
        if draft.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if draft.description.trim().is_empty() {
            return Err(DraftError::MissingField {
                field: "description",
            });
        }
        Ok(())
    }

    fn apply_field(draft: &mut OrganizationDraft, field: OrganizationField, value: String) {
        match field {
            OrganizationField::Name => draft.name = value,
            OrganizationField::Description => draft.description = value,
        }
    }
}

impl EntityRecord for Volunteer {
    type Id = VolunteerId;
    type Draft = VolunteerDraft;
    type Field = VolunteerField;

    const KIND: &'static str = "volunteer";

    fn id(&self) -> VolunteerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: VolunteerId, draft: &VolunteerDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            skills: parse_skills(&draft.skills),
        }
    }

    fn to_draft(&self) -> VolunteerDraft {
        VolunteerDraft {
            name: self.name.clone(),
            skills: join_skills(&self.skills),
        }
    }

    fn validate_draft(draft: &VolunteerDraft) -> Result<(), DraftError> {
        if draft.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        // Presence check on the raw input, before splitting.
        if draft.skills.trim().is_empty() {
            return Err(DraftError::MissingField { field: "skills" });
        }
        Ok(())
    }

    fn apply_field(draft: &mut VolunteerDraft, field: VolunteerField, value: String) {
        match field {
            VolunteerField::Name => draft.name = value,
            VolunteerField::Skills => draft.skills = value,
        }
    }
}
