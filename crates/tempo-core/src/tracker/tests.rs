//! Tests for the tracker module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::models::{Frequency, GoalSpec, RoutineSpec};

/// Helper function to create a test tracker backed by a temp directory.
fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("test.json");
    let tracker = TrackerBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn thesis_goal() -> Item {
    Item::goal(
        "thesis draft",
        true,
        date(2024, 1, 1),
        date(2024, 12, 31),
        vec![GoalSpec(date(2024, 3, 1), 30)],
    )
}

fn gym_routine() -> Item {
    // Offset 4 is Friday.
    Item::routine("gym", true, Frequency::Week, vec![RoutineSpec(4, 60)])
}

#[test]
fn add_and_list_round_trip() {
    let (_temp_dir, tracker) = create_test_tracker();

    tracker.add_item(thesis_goal()).expect("Failed to add goal");
    tracker.add_item(gym_routine()).expect("Failed to add routine");

    let collection = tracker.list_items().expect("Failed to list items");
    assert_eq!(collection.len(), 2);
    assert!(collection.contains("thesis draft"));
    assert!(collection.contains("gym"));
}

#[test]
fn add_rejects_duplicate_descriptions() {
    let (_temp_dir, tracker) = create_test_tracker();

    tracker.add_item(gym_routine()).unwrap();
    let err = tracker.add_item(gym_routine()).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidCollection { .. }));

    // The rejected add must not have touched the data file.
    assert_eq!(tracker.list_items().unwrap().len(), 1);
}

#[test]
fn add_rejects_invalid_items() {
    let (_temp_dir, tracker) = create_test_tracker();

    let item = Item::routine("gym", true, Frequency::Week, vec![RoutineSpec(7, 60)]);
    let err = tracker.add_item(item).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidItem { .. }));
}

#[test]
fn delete_removes_only_the_named_item() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(thesis_goal()).unwrap();
    tracker.add_item(gym_routine()).unwrap();

    let removed = tracker
        .delete_item(&DeleteItem { description: "gym".to_string() })
        .expect("Failed to delete");
    assert_eq!(removed.description, "gym");

    let collection = tracker.list_items().unwrap();
    assert_eq!(collection.len(), 1);
    assert!(!collection.contains("gym"));
}

#[test]
fn delete_unknown_description_is_not_found() {
    let (_temp_dir, tracker) = create_test_tracker();
    let err = tracker
        .delete_item(&DeleteItem { description: "missing".to_string() })
        .unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { .. }));
}

#[test]
fn toggle_twice_restores_the_original_state() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(gym_routine()).unwrap();
    let before = tracker.list_items().unwrap();

    let params = ToggleItem { description: "gym".to_string() };
    let toggled = tracker.toggle_active(&params).unwrap();
    assert!(!toggled.active);

    let toggled = tracker.toggle_active(&params).unwrap();
    assert!(toggled.active);
    assert_eq!(tracker.list_items().unwrap(), before);
}

#[test]
fn edit_attribute_replaces_a_single_field() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(gym_routine()).unwrap();

    let updated = tracker
        .edit_attribute(&EditItem {
            description: "gym".to_string(),
            attribute: "rschedule".to_string(),
            value: "[[0, 45], [4, 60]]".to_string(),
        })
        .expect("Failed to edit");

    assert_eq!(updated.description, "gym");
    match &updated.schedule {
        crate::models::Schedule::Routine { rschedule, .. } => {
            assert_eq!(rschedule, &[RoutineSpec(0, 45), RoutineSpec(4, 60)]);
        }
        _ => panic!("Expected a routine"),
    }
}

#[test]
fn edit_rejects_unknown_attributes() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(gym_routine()).unwrap();

    let err = tracker
        .edit_attribute(&EditItem {
            description: "gym".to_string(),
            attribute: "priority".to_string(),
            value: "3".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidArguments { .. }));
}

#[test]
fn edit_rejects_wrong_kind_attributes() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(gym_routine()).unwrap();

    let err = tracker
        .edit_attribute(&EditItem {
            description: "gym".to_string(),
            attribute: "deadline".to_string(),
            value: "2024-12-31".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidArguments { .. }));
}

#[test]
fn edit_rejects_incompatible_values_and_keeps_the_item() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(gym_routine()).unwrap();

    // Offset 4 in the existing schedule is out of range for 'day'.
    let err = tracker
        .edit_attribute(&EditItem {
            description: "gym".to_string(),
            attribute: "frequency".to_string(),
            value: "day".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::IncompatibleValue { .. }));

    let collection = tracker.list_items().unwrap();
    assert_eq!(collection.get("gym").unwrap(), &gym_routine());
}

#[test]
fn edited_items_always_revalidate() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(thesis_goal()).unwrap();

    // Shrinking the window past the scheduled entry must fail.
    let err = tracker
        .edit_attribute(&EditItem {
            description: "thesis draft".to_string(),
            attribute: "deadline".to_string(),
            value: "2024-02-01".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::IncompatibleValue { .. }));

    // Shrinking it while keeping the entry inside is fine, and the result
    // still validates.
    tracker
        .edit_attribute(&EditItem {
            description: "thesis draft".to_string(),
            attribute: "deadline".to_string(),
            value: "2024-06-01".to_string(),
        })
        .unwrap();
    tracker.list_items().unwrap().validate().unwrap();
}

#[test]
fn edit_description_enforces_uniqueness() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(thesis_goal()).unwrap();
    tracker.add_item(gym_routine()).unwrap();

    let err = tracker
        .edit_attribute(&EditItem {
            description: "gym".to_string(),
            attribute: "description".to_string(),
            value: "thesis draft".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidCollection { .. }));
}

#[test]
fn items_on_date_reports_scheduled_items() {
    let (_temp_dir, tracker) = create_test_tracker();
    tracker.add_item(thesis_goal()).unwrap();
    tracker.add_item(gym_routine()).unwrap();

    // 2024-03-01 was a Friday, so both items match.
    let (_, items) = tracker
        .items_on_date(&OnDate { date: "2024-03-01".to_string(), include_inactive: true })
        .unwrap();
    assert_eq!(items.len(), 2);

    // The next day matches neither.
    let (_, items) = tracker
        .items_on_date(&OnDate { date: "2024-03-02".to_string(), include_inactive: true })
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn items_on_date_rejects_malformed_dates() {
    let (_temp_dir, tracker) = create_test_tracker();
    let err = tracker
        .items_on_date(&OnDate { date: "2023-02-29".to_string(), include_inactive: true })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}
