use std::{collections::HashSet, sync::Arc};

use shared::{
    domain::{
        join_skills, parse_skills, Organization, OrganizationDraft, OrganizationId, Volunteer,
        VolunteerDraft, VolunteerId,
    },
    error::DraftError,
};

use super::*;
use crate::seed::{sample_organizations, sample_volunteers};

fn org_screen() -> Screen<Organization> {
    Screen::seeded(sample_organizations())
}

fn volunteer_screen() -> Screen<Volunteer> {
    Screen::seeded(sample_volunteers())
}

fn org_draft(name: &str, description: &str) -> OrganizationDraft {
    OrganizationDraft {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn volunteer_draft(name: &str, skills: &str) -> VolunteerDraft {
    VolunteerDraft {
        name: name.to_string(),
        skills: skills.to_string(),
    }
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut store = EntityStore::<Organization>::seed(sample_organizations());
    store.delete(OrganizationId(2));
    store
        .create(&org_draft("Shelter Net", "Emergency housing."))
        .expect("create");
    store.delete(OrganizationId(1));
    store
        .create(&org_draft("Green Roots", "Urban gardening."))
        .expect("create");

    let records = store.query();
    let ids: HashSet<_> = records.iter().map(|org| org.id).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let mut store = EntityStore::<Organization>::seed(sample_organizations());
    store.delete(OrganizationId(3));
    // A length-derived allocator would hand out 3 again here.
    let id = store
        .create(&org_draft("Shelter Net", "Emergency housing."))
        .expect("create");
    assert_eq!(id, OrganizationId(4));
}

#[test]
fn delete_is_idempotent() {
    let mut store = EntityStore::<Volunteer>::seed(sample_volunteers());
    assert!(store.delete(VolunteerId(2)));
    let after_first = store.query();
    assert!(!store.delete(VolunteerId(2)));
    assert_eq!(*store.query(), *after_first);
    assert_eq!(store.len(), 2);
}

#[test]
fn delete_of_missing_id_is_a_noop() {
    let mut store = EntityStore::<Volunteer>::seed(sample_volunteers());
    assert!(!store.delete(VolunteerId(99)));
    assert_eq!(store.len(), 3);
}

#[test]
fn empty_query_returns_full_collection_in_order() {
    let screen = org_screen();
    let all: Vec<Organization> = screen.records().as_ref().clone();
    assert_eq!(screen.visible_records(), all);
}

#[test]
fn filter_matches_case_insensitive_substring() {
    let records = sample_organizations();
    let hits = filter_by_name(&records, "foo");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Food For All");

    let hits = filter_by_name(&records, "AND");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Helping Hands");
}

#[test]
fn filter_preserves_collection_order() {
    let records = sample_volunteers();
    // "jo" matches John Doe and Michael Johnson, in insertion order.
    let hits = filter_by_name(&records, "jo");
    let names: Vec<&str> = hits.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Michael Johnson"]);
}

#[test]
fn filter_with_no_matches_is_empty() {
    let records = sample_organizations();
    assert!(filter_by_name(&records, "zzz").is_empty());
}

#[test]
fn cancelled_creation_leaves_collection_untouched() {
    let mut screen = org_screen();
    let before = screen.records();

    screen.open_create();
    screen.edit_field(OrganizationField::Name, "Half Typed".to_string());
    screen.edit_field(OrganizationField::Description, "Never committed.".to_string());
    screen.cancel_edit();

    assert!(screen.session().is_idle());
    assert!(Arc::ptr_eq(&before, &screen.records()));
}

#[test]
fn cancelled_edit_leaves_collection_untouched() {
    let mut screen = volunteer_screen();
    let before = screen.records();

    screen.start_edit(VolunteerId(1));
    screen.edit_field(VolunteerField::Name, "Renamed".to_string());
    screen.cancel_edit();

    assert!(screen.session().is_idle());
    assert!(Arc::ptr_eq(&before, &screen.records()));
}

#[test]
fn save_replaces_only_the_targeted_record() {
    let mut screen = volunteer_screen();
    screen.start_edit(VolunteerId(2));
    screen.edit_field(VolunteerField::Name, "Jane Smith-Lee".to_string());
    screen.edit_field(VolunteerField::Skills, "Cleaning, Plumbing".to_string());
    screen.save_edit().expect("save");

    let records = screen.records();
    let names: Vec<&str> = records.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Jane Smith-Lee", "Michael Johnson"]);
    assert_eq!(records[1].id, VolunteerId(2));
    assert_eq!(records[1].skills, ["Cleaning", "Plumbing"]);
    // Neighbours are untouched.
    assert_eq!(records[0], sample_volunteers()[0]);
    assert_eq!(records[2], sample_volunteers()[2]);
    assert!(screen.session().is_idle());
}

#[test]
fn skills_parse_and_rejoin_round_trip() {
    let parsed = parse_skills("Cooking, Teaching ,  Painting");
    assert_eq!(parsed, ["Cooking", "Teaching", "Painting"]);
    assert_eq!(join_skills(&parsed), "Cooking, Teaching, Painting");
}

#[test]
fn skills_parsing_drops_empty_tokens() {
    assert_eq!(parse_skills("Cooking,,  , Teaching"), ["Cooking", "Teaching"]);
    assert!(parse_skills("  ,  ").is_empty());
}

#[test]
fn create_rejects_missing_name() {
    let mut store = EntityStore::<Organization>::seed(sample_organizations());
    let err = store
        .create(&org_draft("", "Has a description."))
        .expect_err("must reject");
    assert_eq!(err, DraftError::MissingName);
    assert_eq!(store.len(), 3);
}

#[test]
fn create_rejects_missing_payload() {
    let mut orgs = EntityStore::<Organization>::seed(sample_organizations());
    let err = orgs.create(&org_draft("Named", "")).expect_err("must reject");
    assert_eq!(err, DraftError::MissingField { field: "description" });
    assert_eq!(orgs.len(), 3);

    let mut volunteers = EntityStore::<Volunteer>::seed(sample_volunteers());
    let err = volunteers
        .create(&volunteer_draft("Named", "   "))
        .expect_err("must reject");
    assert_eq!(err, DraftError::MissingField { field: "skills" });
    assert_eq!(volunteers.len(), 3);
}

#[test]
fn rejected_commit_keeps_the_draft_alive() {
    let mut screen = org_screen();
    screen.open_create();
    screen.edit_field(OrganizationField::Name, "Only A Name".to_string());

    let err = screen.commit_create().expect_err("must reject");
    assert_eq!(err, DraftError::MissingField { field: "description" });
    // The rejected input is retained for the user to fix, not discarded.
    match screen.session() {
        SessionState::Creating(draft) => assert_eq!(draft.name, "Only A Name"),
        other => panic!("expected Creating, got {other:?}"),
    }
    assert_eq!(screen.records().len(), 3);
}

#[test]
fn committed_creation_appends_in_insertion_order() {
    let mut screen = volunteer_screen();
    screen.open_create();
    screen.edit_field(VolunteerField::Name, "Ana Reyes".to_string());
    screen.edit_field(VolunteerField::Skills, "Gardening, First Aid".to_string());
    screen.commit_create().expect("commit");

    assert!(screen.session().is_idle());
    let records = screen.records();
    assert_eq!(records.len(), 4);
    let last = records.last().expect("appended record");
    assert_eq!(last.id, VolunteerId(4));
    assert_eq!(last.name, "Ana Reyes");
    assert_eq!(last.skills, ["Gardening", "First Aid"]);
}

#[test]
fn commit_outside_a_creation_session_is_a_noop() {
    let mut screen = org_screen();
    screen.commit_create().expect("noop");
    screen.start_edit(OrganizationId(1));
    screen.commit_create().expect("noop");
    assert_eq!(screen.records().len(), 3);
    assert!(matches!(screen.session(), SessionState::Editing { .. }));
}

#[test]
fn mutations_swap_the_snapshot_reads_do_not() {
    let mut screen = org_screen();
    let before = screen.records();

    // Pure reads keep the same snapshot.
    let _ = screen.visible_records();
    screen.set_search_query("help");
    assert!(Arc::ptr_eq(&before, &screen.records()));

    screen.delete_record(OrganizationId(1));
    assert!(!Arc::ptr_eq(&before, &screen.records()));
}

#[test]
fn update_against_missing_id_is_a_noop() {
    let mut store = EntityStore::<Organization>::seed(sample_organizations());
    let ghost = Organization {
        id: OrganizationId(42),
        name: "Ghost".to_string(),
        description: "Not in the collection.".to_string(),
    };
    assert!(!store.update(OrganizationId(42), ghost));
    assert_eq!(*store.query(), sample_organizations());
}

#[test]
fn update_rejects_a_mismatched_record_id() {
    let mut store = EntityStore::<Organization>::seed(sample_organizations());
    let mut record = store.get(OrganizationId(2)).expect("seeded").clone();
    record.id = OrganizationId(3);
    assert!(!store.update(OrganizationId(2), record));
    assert_eq!(*store.query(), sample_organizations());
}

#[test]
fn rejected_save_keeps_the_session_editing() {
    let mut screen = volunteer_screen();
    let before = screen.records();

    screen.start_edit(VolunteerId(1));
    screen.edit_field(VolunteerField::Name, String::new());
    let err = screen.save_edit().expect_err("must reject");
    assert_eq!(err, DraftError::MissingName);

    // The session stays live with the draft intact for the user to fix.
    assert_eq!(screen.session().editing_id(), Some(VolunteerId(1)));
    match screen.session() {
        SessionState::Editing { draft, .. } => {
            assert_eq!(draft.name, "");
            assert_eq!(draft.skills, "Cooking, Teaching");
        }
        other => panic!("expected Editing, got {other:?}"),
    }
    assert!(Arc::ptr_eq(&before, &screen.records()));
}

#[test]
fn save_after_concurrent_delete_is_benign() {
    let mut screen = org_screen();
    screen.start_edit(OrganizationId(2));
    screen.edit_field(OrganizationField::Name, "Renamed".to_string());
    // The record disappears underneath the live session (stale UI race).
    screen.delete_record(OrganizationId(2));

    screen.save_edit().expect("benign noop");
    assert!(screen.session().is_idle());
    let records = screen.records();
    let names: Vec<&str> = records.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Helping Hands", "Food For All"]);
}

#[test]
fn starting_a_new_edit_replaces_the_live_session() {
    let mut screen = volunteer_screen();
    screen.start_edit(VolunteerId(1));
    screen.edit_field(VolunteerField::Name, "Stale edits".to_string());
    screen.start_edit(VolunteerId(3));

    assert_eq!(screen.session().editing_id(), Some(VolunteerId(3)));
    match screen.session() {
        SessionState::Editing { draft, .. } => {
            assert_eq!(draft.name, "Michael Johnson");
            assert_eq!(draft.skills, "Painting, Teaching");
        }
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn edit_of_missing_record_leaves_session_idle() {
    let mut screen = org_screen();
    screen.start_edit(OrganizationId(99));
    assert!(screen.session().is_idle());
}

#[test]
fn field_edits_are_ignored_while_idle() {
    let mut screen = org_screen();
    screen.edit_field(OrganizationField::Name, "Nowhere to go".to_string());
    assert!(screen.session().is_idle());
    assert!(screen.session().draft().is_none());
}

#[test]
fn intents_drive_the_screen_like_direct_calls() {
    let mut screen = org_screen();
    screen.apply(ScreenIntent::OpenCreate).expect("intent");
    screen
        .apply(ScreenIntent::EditField(
            OrganizationField::Name,
            "Shelter Net".to_string(),
        ))
        .expect("intent");
    screen
        .apply(ScreenIntent::EditField(
            OrganizationField::Description,
            "Emergency housing.".to_string(),
        ))
        .expect("intent");
    screen.apply(ScreenIntent::CommitCreate).expect("intent");
    screen
        .apply(ScreenIntent::SetSearchQuery("shelter".to_string()))
        .expect("intent");

    let visible = screen.visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Shelter Net");

    screen
        .apply(ScreenIntent::DeleteRecord(visible[0].id))
        .expect("intent");
    assert!(screen.visible_records().is_empty());
}

#[test]
fn search_query_narrows_the_visible_records_only() {
    let mut screen = volunteer_screen();
    screen.set_search_query("smith");
    let visible = screen.visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Jane Smith");
    // The authoritative collection is untouched by searching.
    assert_eq!(screen.records().len(), 3);
    assert_eq!(screen.search_query(), "smith");
}

#[test]
fn edit_draft_carries_the_join_form_of_skills() {
    let volunteer = sample_volunteers().remove(0);
    let draft = volunteer.to_draft();
    assert_eq!(draft.skills, "Cooking, Teaching");
}

#[test]
fn reports_catalog_lookup_and_options() {
    let catalog = ReportsCatalog::sample();
    assert_eq!(
        catalog.options(),
        ["All Reports", "Organization A", "Organization B", "Organization C"]
    );

    let combined = catalog.lookup(ALL_REPORTS_LABEL).expect("combined entry");
    assert_eq!(combined.total_donations, 6000);
    assert_eq!(combined.total_volunteers, 370);
    assert_eq!(combined.total_events(), 5);
    assert_eq!(
        combined.event_labels(),
        ["Event 1", "Event 2", "Event 3", "Event 4", "Event 5"]
    );
    assert_eq!(combined.skill_counts.len(), TOP_SKILL_LABELS.len());

    let org_b = catalog.lookup("Organization B").expect("org b");
    assert_eq!(org_b.total_donations, 1500);
    assert!(catalog.lookup("Organization Z").is_none());
}
