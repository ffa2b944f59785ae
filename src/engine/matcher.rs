//! Tolerant field lookup inside integrator responses.
//!
//! Integrators return wildly different shapes: flat objects, an `avFields`
//! array, or the interesting values nested under a wrapper key. Rather than
//! demand one schema, the matcher walks a fixed chain of candidate locators
//! and takes the first hit. The chain order is load-bearing: a top-level
//! field always beats the same field nested under `vehicle`.

use serde_json::{Map, Value};

/// Lookup outcome. `Found(Value::Null)` means the key was present with an
/// explicit null, which is not the same thing as [`FieldLookup::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldLookup {
    Found(Value),
    Missing,
}

impl FieldLookup {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldLookup::Missing)
    }

    /// The observed value with `Missing` collapsed to JSON null, for
    /// reporting in a [`crate::models::report::FieldResult`].
    pub fn observed(&self) -> Value {
        match self {
            FieldLookup::Found(value) => value.clone(),
            FieldLookup::Missing => Value::Null,
        }
    }
}

type Locator = fn(&Map<String, Value>, &[&str]) -> Option<Value>;

/// Candidate locations in priority order.
const LOCATORS: [Locator; 3] = [top_level, av_fields_entry, nested_object];

/// Find one logical field by its accepted key variants (e.g.
/// `["is_autonomous", "isAutonomous"]`, earlier variants win).
pub fn find_field(body: &Map<String, Value>, keys: &[&str]) -> FieldLookup {
    for locate in LOCATORS {
        if let Some(value) = locate(body, keys) {
            return FieldLookup::Found(value);
        }
    }

    FieldLookup::Missing
}

fn lookup_in(obj: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|key| obj.get(*key).cloned())
}

fn top_level(body: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    lookup_in(body, keys)
}

/// First element of a non-empty `avFields` / `av_fields` array.
fn av_fields_entry(body: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    for array_key in ["avFields", "av_fields"] {
        let first = body
            .get(array_key)
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(Value::as_object);

        if let Some(entry) = first {
            if let Some(value) = lookup_in(entry, keys) {
                return Some(value);
            }
        }
    }

    None
}

/// Objects nested under conventional wrapper keys, in fixed order.
fn nested_object(body: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    for wrapper in ["fields", "data", "result", "delivery", "vehicle"] {
        if let Some(nested) = body.get(wrapper).and_then(Value::as_object) {
            if let Some(value) = lookup_in(nested, keys) {
                return Some(value);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::{find_field, FieldLookup};

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn direct_key_is_found() {
        let body = body(json!({ "passcode": "1234" }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(json!("1234"))
        );
    }

    #[test]
    fn earlier_key_variant_wins() {
        let body = body(json!({ "isAutonomous": true, "is_autonomous": false }));
        assert_eq!(
            find_field(&body, &["is_autonomous", "isAutonomous"]),
            FieldLookup::Found(json!(false))
        );
    }

    #[test]
    fn top_level_beats_nested_vehicle() {
        let body = body(json!({
            "passcode": "1111",
            "vehicle": { "passcode": "2222" }
        }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(json!("1111"))
        );
    }

    #[test]
    fn av_fields_array_beats_nested_objects() {
        let body = body(json!({
            "avFields": [{ "passcode": "3333" }],
            "data": { "passcode": "4444" }
        }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(json!("3333"))
        );
    }

    #[test]
    fn empty_av_fields_array_falls_through() {
        let body = body(json!({
            "avFields": [],
            "av_fields": [{ "passcode": "5555" }]
        }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(json!("5555"))
        );
    }

    #[test]
    fn nested_wrappers_are_searched_in_fixed_order() {
        let body = body(json!({
            "result": { "passcode": "6666" },
            "vehicle": { "passcode": "7777" }
        }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(json!("6666"))
        );
    }

    #[test]
    fn absent_field_is_missing_not_null() {
        let body = body(json!({ "unrelated": 1, "data": { "other": 2 } }));
        let lookup = find_field(&body, &["passcode"]);
        assert!(lookup.is_missing());
        assert_ne!(lookup, FieldLookup::Found(Value::Null));
    }

    #[test]
    fn explicit_null_is_found_not_missing() {
        let body = body(json!({ "passcode": null }));
        assert_eq!(
            find_field(&body, &["passcode"]),
            FieldLookup::Found(Value::Null)
        );
    }
}
