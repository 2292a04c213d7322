use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(OrganizationId);
id_newtype!(VolunteerId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub description: String,
}

/// Skills are stored parsed: non-empty trimmed tokens in input order, never
/// the raw comma-delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub description: String,
}

/// While drafted, skills stay in the comma-delimited edit-source form the
/// user types; they are parsed only on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerDraft {
    pub name: String,
    pub skills: String,
}

/// Splits a comma-delimited skills string into trimmed tokens, dropping
/// empty ones and preserving order.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-joins parsed skills into the edit-source form.
pub fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}
