//! Structural validation of raw item and collection records.
//!
//! Records arrive from storage as untyped JSON, and some of the rules - the
//! exclusive key sets per item kind, tuple shapes, field types - are only
//! observable at that level, because serde's typed decoding silently ignores
//! surplus keys. The predicates here check shape first and then hand the
//! record to the typed models, so every value-level and cross-attribute rule
//! lives in exactly one place ([`Item::validate`] and [`crate::compat`]).
//!
//! All predicates return plain booleans; the mutation paths that need a
//! specific error kind go through the typed API instead.

use std::collections::HashSet;

use jiff::civil::Date;
use serde_json::Value;

use crate::models::{duration_in_bounds, Collection, Item};

/// Keys every item carries, regardless of kind.
const BASE_KEYS: [&str; 3] = ["description", "type", "active"];

/// Keys only a goal may carry.
const GOAL_KEYS: [&str; 3] = ["start_date", "deadline", "gschedule"];

/// Keys only a routine may carry.
const ROUTINE_KEYS: [&str; 2] = ["frequency", "rschedule"];

/// Whether a description satisfies the isolated 1-15 character rule.
pub fn description_in_bounds(description: &str) -> bool {
    (1..=15).contains(&description.chars().count())
}

/// Whether a raw value is a well-formed description.
pub fn is_valid_description(value: &Value) -> bool {
    value.as_str().is_some_and(description_in_bounds)
}

/// Whether a raw value is one of the two item kinds.
pub fn is_valid_type(value: &Value) -> bool {
    matches!(value.as_str(), Some("goal" | "routine"))
}

/// Whether a raw value is a boolean active flag.
pub fn is_valid_active(value: &Value) -> bool {
    value.is_boolean()
}

/// Whether a raw value is one of the four frequencies.
pub fn is_valid_frequency(value: &Value) -> bool {
    matches!(value.as_str(), Some("day" | "week" | "month" | "year"))
}

/// Whether a raw value is ISO-8601 text naming an existing calendar day.
pub fn is_valid_date(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.parse::<Date>().is_ok())
}

/// Whether a raw value is a structurally valid routine schedule: a list of
/// `[offset, minutes]` integer pairs with durations in `0..=1440`.
///
/// This check is frequency-agnostic; offset-range legality belongs to the
/// compatibility stage ([`crate::compat::routine_compatible`]).
pub fn is_valid_rschedule(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|entries| entries.iter().all(is_valid_routine_entry))
}

fn is_valid_routine_entry(entry: &Value) -> bool {
    entry.as_array().is_some_and(|pair| {
        pair.len() == 2
            && pair[0].as_i64().is_some()
            && pair[1].as_i64().is_some_and(duration_in_bounds)
    })
}

/// Whether a raw value is a structurally valid goal schedule: a list of
/// `[date, minutes]` pairs with parseable dates and durations in `0..=1440`.
///
/// Window containment belongs to the compatibility stage
/// ([`crate::compat::goal_compatible`]).
pub fn is_valid_gschedule(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|entries| entries.iter().all(is_valid_goal_entry))
}

fn is_valid_goal_entry(entry: &Value) -> bool {
    entry.as_array().is_some_and(|pair| {
        pair.len() == 2
            && is_valid_date(&pair[0])
            && pair[1].as_i64().is_some_and(duration_in_bounds)
    })
}

/// Whether the record carries exactly the key set its declared type
/// requires: the three common keys plus the goal-only or routine-only keys,
/// nothing more and nothing less.
fn has_exclusive_key_set(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    let kind_keys: &[&str] = match map.get("type").and_then(Value::as_str) {
        Some("goal") => &GOAL_KEYS,
        Some("routine") => &ROUTINE_KEYS,
        _ => return false,
    };
    map.len() == BASE_KEYS.len() + kind_keys.len()
        && BASE_KEYS.iter().chain(kind_keys).all(|key| map.contains_key(*key))
}

/// Whether a raw record is a completely valid item.
///
/// Checks run in strict order and short-circuit: structured record, exact
/// key set for the declared type, then field-level and cross-attribute
/// validity via the typed model. A wrong-kind or missing field fails the
/// record before any value is inspected.
pub fn is_valid_item(value: &Value) -> bool {
    has_exclusive_key_set(value)
        && serde_json::from_value::<Item>(value.clone())
            .map(|item| item.validate().is_ok())
            .unwrap_or(false)
}

/// Whether a raw value is a list of valid items.
pub fn is_valid_items(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(is_valid_item))
}

/// Whether a raw record is a completely valid collection: an object holding
/// exactly the `items` list, with unique descriptions and every item valid.
pub fn is_valid_collection(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    if map.len() != 1 {
        return false;
    }
    let Some(items) = map.get("items").and_then(Value::as_array) else {
        return false;
    };

    let mut seen = HashSet::new();
    for item in items {
        let Some(description) = item.get("description").and_then(Value::as_str) else {
            return false;
        };
        if !seen.insert(description) {
            return false;
        }
    }

    items.iter().all(is_valid_item)
}

/// Decodes a raw record into a typed collection, validating it on the way.
///
/// # Errors
///
/// * `TrackerError::InvalidCollection` - the record fails structural checks
/// * `TrackerError::Serialization` - the record cannot be decoded
pub fn decode_collection(value: Value) -> crate::error::Result<Collection> {
    if !is_valid_collection(&value) {
        return Err(crate::error::TrackerError::invalid_collection(
            "record failed structural validation",
        ));
    }
    let collection: Collection = serde_json::from_value(value)?;
    collection.validate()?;
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn goal_record() -> Value {
        json!({
            "description": "thesis draft",
            "type": "goal",
            "active": true,
            "start_date": "2024-01-01",
            "deadline": "2024-12-31",
            "gschedule": [["2024-03-01", 30]],
        })
    }

    fn routine_record() -> Value {
        json!({
            "description": "morning run",
            "type": "routine",
            "active": true,
            "frequency": "week",
            "rschedule": [[0, 60]],
        })
    }

    #[test]
    fn accepts_well_formed_items() {
        assert!(is_valid_item(&goal_record()));
        assert!(is_valid_item(&routine_record()));
    }

    #[test]
    fn rejects_scalars_and_missing_type() {
        assert!(!is_valid_item(&json!(42)));
        assert!(!is_valid_item(&json!("goal")));
        assert!(!is_valid_item(&json!({"description": "x", "active": true})));
    }

    #[test]
    fn key_sets_are_exclusive() {
        // A goal carrying a routine key is invalid regardless of values.
        let mut mixed = goal_record();
        mixed["frequency"] = json!("week");
        assert!(!is_valid_item(&mixed));

        // Partial key sets fail too.
        let mut partial = routine_record();
        partial.as_object_mut().unwrap().remove("rschedule");
        assert!(!is_valid_item(&partial));

        // As do supersets with unrecognized keys.
        let mut superset = routine_record();
        superset["priority"] = json!(3);
        assert!(!is_valid_item(&superset));
    }

    #[test]
    fn description_bounds_are_inclusive() {
        let mut item = routine_record();
        item["description"] = json!("a");
        assert!(is_valid_item(&item));
        item["description"] = json!("exactly 15 ch..");
        assert!(is_valid_item(&item));
        item["description"] = json!("");
        assert!(!is_valid_item(&item));
        item["description"] = json!("sixteen chars...");
        assert!(!is_valid_item(&item));
        item["description"] = json!(7);
        assert!(!is_valid_item(&item));
    }

    #[test]
    fn rschedule_shape_is_checked_structurally() {
        assert!(is_valid_rschedule(&json!([[0, 0], [3, 1440]])));
        assert!(is_valid_rschedule(&json!([])));
        assert!(!is_valid_rschedule(&json!("not a list")));
        assert!(!is_valid_rschedule(&json!([[0]])));
        assert!(!is_valid_rschedule(&json!([[0, 1, 2]])));
        assert!(!is_valid_rschedule(&json!([[true, 30]])));
        assert!(!is_valid_rschedule(&json!([[0, 1441]])));
        assert!(!is_valid_rschedule(&json!([[0, -1]])));
        // Offsets are unconstrained here; range checks are deferred.
        assert!(is_valid_rschedule(&json!([[999, 30]])));
    }

    #[test]
    fn gschedule_shape_is_checked_structurally() {
        assert!(is_valid_gschedule(&json!([["2024-03-01", 30]])));
        assert!(!is_valid_gschedule(&json!([["2023-02-29", 30]])));
        assert!(!is_valid_gschedule(&json!([[20240301, 30]])));
        assert!(!is_valid_gschedule(&json!([["2024-03-01", "30"]])));
        assert!(!is_valid_gschedule(&json!({"2024-03-01": 30})));
    }

    #[test]
    fn out_of_range_offsets_invalidate_the_item() {
        let mut item = routine_record();
        item["frequency"] = json!("month");
        item["rschedule"] = json!([[27, 30]]);
        assert!(is_valid_item(&item));
        item["rschedule"] = json!([[28, 30]]);
        assert!(!is_valid_item(&item));
    }

    #[test]
    fn out_of_window_entries_invalidate_the_goal() {
        let mut item = goal_record();
        item["gschedule"] = json!([["2023-12-31", 30]]);
        assert!(!is_valid_item(&item));
    }

    #[test]
    fn collection_requires_exactly_the_items_field() {
        assert!(is_valid_collection(&json!({"items": []})));
        assert!(is_valid_collection(&json!({"items": [goal_record()]})));
        assert!(!is_valid_collection(&json!([])));
        assert!(!is_valid_collection(&json!({})));
        assert!(!is_valid_collection(&json!({"items": [], "extra": 1})));
        assert!(!is_valid_collection(&json!({"records": []})));
    }

    #[test]
    fn collection_rejects_duplicate_descriptions() {
        let data = json!({"items": [routine_record(), routine_record()]});
        assert!(!is_valid_collection(&data));
    }

    #[test]
    fn decode_collection_round_trips_valid_data() {
        let data = json!({"items": [goal_record(), routine_record()]});
        let collection = decode_collection(data).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(collection.contains("thesis draft"));
    }

    #[test]
    fn decode_collection_rejects_invalid_data() {
        assert!(decode_collection(json!({"items": [{"description": "x"}]})).is_err());
    }
}
