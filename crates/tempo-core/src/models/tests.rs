//! Tests for the data models.

use jiff::civil::date;
use serde_json::json;

use crate::error::TrackerError;
use crate::models::{
    Attribute, AttributeValue, Collection, Frequency, GoalSpec, Item, ItemKind, RoutineSpec,
    Schedule,
};

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
    Item::routine("gym", true, Frequency::Week, vec![RoutineSpec(4, 60)])
}

#[test]
fn items_serialize_with_the_flat_tagged_shape() {
    let value = serde_json::to_value(thesis_goal()).unwrap();
    assert_eq!(
        value,
        json!({
            "description": "thesis draft",
            "active": true,
            "type": "goal",
            "start_date": "2024-01-01",
            "deadline": "2024-12-31",
            "gschedule": [["2024-03-01", 30]],
        })
    );

    let value = serde_json::to_value(gym_routine()).unwrap();
    assert_eq!(value["type"], "routine");
    assert_eq!(value["frequency"], "week");
    assert_eq!(value["rschedule"], json!([[4, 60]]));
}

#[test]
fn items_round_trip_through_serde() {
    for item in [thesis_goal(), gym_routine()] {
        let text = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&text).unwrap();
        assert_eq!(back, item);
    }
}

#[test]
fn item_validation_reports_specific_kinds() {
    let mut item = gym_routine();
    item.description = String::new();
    assert!(matches!(
        item.validate().unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));

    let item = Item::routine("gym", true, Frequency::Week, vec![RoutineSpec(3, 1441)]);
    assert!(matches!(
        item.validate().unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));

    let item = Item::routine("gym", true, Frequency::Week, vec![RoutineSpec(7, 60)]);
    assert!(matches!(
        item.validate().unwrap_err(),
        TrackerError::IncompatibleValue { .. }
    ));

    let item = Item::goal(
        "trip",
        true,
        date(2024, 6, 1),
        date(2024, 5, 1),
        vec![],
    );
    assert!(matches!(
        item.validate().unwrap_err(),
        TrackerError::IncompatibleValue { .. }
    ));

    let item = Item::goal(
        "trip",
        true,
        date(2024, 1, 1),
        date(2024, 12, 31),
        vec![GoalSpec(date(2025, 1, 1), 30)],
    );
    assert!(matches!(
        item.validate().unwrap_err(),
        TrackerError::IncompatibleValue { .. }
    ));
}

#[test]
fn kinds_and_frequencies_parse_from_strings() {
    assert_eq!("goal".parse::<ItemKind>().unwrap(), ItemKind::Goal);
    assert_eq!("routine".parse::<ItemKind>().unwrap(), ItemKind::Routine);
    assert!("habit".parse::<ItemKind>().is_err());

    assert_eq!("month".parse::<Frequency>().unwrap(), Frequency::Month);
    assert!("fortnight".parse::<Frequency>().is_err());
}

#[test]
fn attribute_names_map_to_the_eight_keys() {
    for (name, attribute) in [
        ("description", Attribute::Description),
        ("type", Attribute::Type),
        ("active", Attribute::Active),
        ("frequency", Attribute::Frequency),
        ("rschedule", Attribute::Rschedule),
        ("gschedule", Attribute::Gschedule),
        ("start_date", Attribute::StartDate),
        ("deadline", Attribute::Deadline),
    ] {
        assert_eq!(name.parse::<Attribute>().unwrap(), attribute);
        assert_eq!(attribute.as_str(), name);
    }
    assert!("priority".parse::<Attribute>().is_err());
}

#[test]
fn attribute_values_parse_from_text() {
    assert_eq!(
        AttributeValue::parse(Attribute::Active, "false").unwrap(),
        AttributeValue::Active(false)
    );
    assert_eq!(
        AttributeValue::parse(Attribute::Rschedule, "[[0, 30]]").unwrap(),
        AttributeValue::Rschedule(vec![RoutineSpec(0, 30)])
    );
    assert_eq!(
        AttributeValue::parse(Attribute::StartDate, "2024-02-29").unwrap(),
        AttributeValue::StartDate(date(2024, 2, 29))
    );

    assert!(AttributeValue::parse(Attribute::Active, "maybe").is_err());
    assert!(AttributeValue::parse(Attribute::Description, "").is_err());
    assert!(AttributeValue::parse(Attribute::Rschedule, "[[0, 30]").is_err());
    assert!(AttributeValue::parse(Attribute::Rschedule, "[[0, 2000]]").is_err());
    assert!(AttributeValue::parse(Attribute::Deadline, "2023-02-29").is_err());
}

#[test]
fn collection_toggle_is_self_inverse() {
    let mut collection = Collection::new();
    collection.add_item(gym_routine()).unwrap();
    let original = collection.clone();

    collection.toggle_active("gym").unwrap();
    assert!(!collection.get("gym").unwrap().active);
    collection.toggle_active("gym").unwrap();
    assert_eq!(collection, original);
}

#[test]
fn collection_rejects_duplicate_adds() {
    let mut collection = Collection::new();
    collection.add_item(gym_routine()).unwrap();
    assert!(matches!(
        collection.add_item(gym_routine()).unwrap_err(),
        TrackerError::InvalidCollection { .. }
    ));
    assert_eq!(collection.len(), 1);
}

#[test]
fn edit_keeps_the_rest_of_the_item_untouched() {
    let mut collection = Collection::new();
    collection.add_item(thesis_goal()).unwrap();

    let updated = collection
        .edit_attribute("thesis draft", AttributeValue::Active(false))
        .unwrap()
        .clone();
    assert!(!updated.active);
    assert_eq!(updated.schedule, thesis_goal().schedule);
}

#[test]
fn edit_type_only_accepts_the_identity() {
    let mut collection = Collection::new();
    collection.add_item(gym_routine()).unwrap();

    collection
        .edit_attribute("gym", AttributeValue::Type(ItemKind::Routine))
        .unwrap();
    assert!(matches!(
        collection
            .edit_attribute("gym", AttributeValue::Type(ItemKind::Goal))
            .unwrap_err(),
        TrackerError::IncompatibleValue { .. }
    ));
}

#[test]
fn edit_rejects_wrong_kind_attributes() {
    let mut collection = Collection::new();
    collection.add_item(thesis_goal()).unwrap();

    assert!(matches!(
        collection
            .edit_attribute("thesis draft", AttributeValue::Frequency(Frequency::Day))
            .unwrap_err(),
        TrackerError::InvalidArguments { .. }
    ));
}

#[test]
fn schedules_widen_and_narrow_through_edits() {
    let mut collection = Collection::new();
    collection.add_item(thesis_goal()).unwrap();

    // Start date may move up to the earliest scheduled entry.
    collection
        .edit_attribute("thesis draft", AttributeValue::StartDate(date(2024, 3, 1)))
        .unwrap();
    assert!(matches!(
        collection
            .edit_attribute("thesis draft", AttributeValue::StartDate(date(2024, 3, 2)))
            .unwrap_err(),
        TrackerError::IncompatibleValue { .. }
    ));
}

#[test]
fn item_display_shows_kind_specific_lines() {
    let output = format!("{}", thesis_goal());
    assert!(output.contains("## thesis draft (goal)"));
    assert!(output.contains("- Start date: 2024-01-01"));
    assert!(output.contains("- Deadline: 2024-12-31"));
    assert!(output.contains("  - 2024-03-01 (30 min)"));

    let output = format!("{}", gym_routine());
    assert!(output.contains("## gym (routine)"));
    assert!(output.contains("- Frequency: week"));
    assert!(output.contains("  - offset 4 (60 min)"));
}

#[test]
fn schedule_kind_matches_the_variant() {
    assert_eq!(thesis_goal().kind(), ItemKind::Goal);
    assert_eq!(gym_routine().kind(), ItemKind::Routine);
    assert!(matches!(thesis_goal().schedule, Schedule::Goal { .. }));
}
