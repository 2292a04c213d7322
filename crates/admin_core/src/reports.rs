//! Read-only reporting dashboard data: a fixed catalog of per-organization
//! figures plus a combined entry. Pure selection lookup, no state machine.

use serde::{Deserialize, Serialize};

pub const ALL_REPORTS_LABEL: &str = "All Reports";

/// Labels for the skill-count breakdown, in catalog order.
pub const TOP_SKILL_LABELS: [&str; 5] =
    ["Cooking", "Teaching", "Cleaning", "Carpentry", "Painting"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgReport {
    /// Participant counts, one entry per event.
    pub event_participants: Vec<u32>,
    /// Counts aligned with [`TOP_SKILL_LABELS`].
    pub skill_counts: Vec<u32>,
    pub total_donations: u64,
    pub total_volunteers: u32,
    pub recent_donators: Vec<String>,
    pub recent_events: Vec<String>,
}

impl OrgReport {
    /// Number of events is the length of the participants series.
    pub fn total_events(&self) -> usize {
        self.event_participants.len()
    }

    pub fn event_labels(&self) -> Vec<String> {
        (1..=self.total_events())
            .map(|n| format!("Event {n}"))
            .collect()
    }
}

/// Ordered label → report mapping backing the dashboard dropdown. The
/// combined entry comes first, matching the dropdown's default selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsCatalog {
    entries: Vec<(String, OrgReport)>,
}

impl ReportsCatalog {
    pub fn new(entries: Vec<(String, OrgReport)>) -> Self {
        Self { entries }
    }

    /// Dropdown options, in catalog order.
    pub fn options(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn lookup(&self, label: &str) -> Option<&OrgReport> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == label)
            .map(|(_, report)| report)
    }

    pub fn sample() -> Self {
        fn names(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }

        Self::new(vec![
            (
                ALL_REPORTS_LABEL.to_string(),
                OrgReport {
                    // Combined across the three organizations.
                    event_participants: vec![150, 195, 265, 180, 240],
                    skill_counts: vec![85, 80, 75, 70, 65],
                    total_donations: 6000,
                    total_volunteers: 370,
                    recent_donators: names(&[
                        "John Doe",
                        "Alice Johnson",
                        "David Brown",
                        "Susan Taylor",
                        "Jessica Wilson",
                    ]),
                    recent_events: names(&[
                        "Community Cleanup",
                        "Food Drive",
                        "Educational Workshop",
                        "Charity Run",
                        "Health Fair",
                    ]),
                },
            ),
            (
                "Organization A".to_string(),
                OrgReport {
                    event_participants: vec![50, 75, 100, 60, 80],
                    skill_counts: vec![30, 25, 20, 15, 10],
                    total_donations: 2000,
                    total_volunteers: 100,
                    recent_donators: names(&["John Doe", "Alice Johnson", "Emily Clark"]),
                    recent_events: names(&["Community Cleanup", "Food Drive"]),
                },
            ),
            (
                "Organization B".to_string(),
                OrgReport {
                    event_participants: vec![40, 65, 80, 70, 90],
                    skill_counts: vec![35, 30, 25, 20, 15],
                    total_donations: 1500,
                    total_volunteers: 120,
                    recent_donators: names(&["David Brown", "Susan Taylor", "Michael Scott"]),
                    recent_events: names(&["Educational Workshop", "Charity Run"]),
                },
            ),
            (
                "Organization C".to_string(),
                OrgReport {
                    event_participants: vec![60, 55, 85, 50, 70],
                    skill_counts: vec![20, 25, 30, 35, 40],
                    total_donations: 2500,
                    total_volunteers: 150,
                    recent_donators: names(&["Jessica Wilson", "George Anderson", "Rachel Green"]),
                    recent_events: names(&["Health Fair", "Toy Drive"]),
                },
            ),
        ])
    }
}
