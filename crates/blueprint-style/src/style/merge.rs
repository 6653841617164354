//! Non-destructive deep merge.
//!
//! Used to apply presets: the incoming record only fills gaps, it never
//! replaces a value the existing record already holds.
//!
//! | existing | incoming | result |
//! |----------|----------|--------|
//! | absent | any | incoming |
//! | object | object | recursive merge |
//! | anything else | any | existing |
//!
//! Arrays are leaves: they are never merged element-wise.

use serde_json::{Map, Value};

/// Merges `incoming` into `existing`, keeping every existing value.
///
/// Neither input is modified.
///
/// # Example
///
/// ```rust
/// use blueprint_style::merge;
/// use serde_json::json;
///
/// let merged = merge(
///     &json!({"p": 2, "sm": {"p": 3}}),
///     &json!({"p": 9, "bg": "primary", "sm": {"m": 1}}),
/// );
/// assert_eq!(merged, json!({"p": 2, "bg": "primary", "sm": {"p": 3, "m": 1}}));
/// ```
pub fn merge(existing: &Value, incoming: &Value) -> Value {
    match (existing, incoming) {
        (Value::Object(existing), Value::Object(incoming)) => {
            Value::Object(merge_maps(existing, incoming))
        }
        _ => existing.clone(),
    }
}

/// [`merge`] over two objects.
pub fn merge_maps(existing: &Map<String, Value>, incoming: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = existing.clone();

    for (key, value) in incoming {
        match merged.get_mut(key) {
            None => {
                merged.insert(key.clone(), value.clone());
            }
            Some(current) if current.is_object() && value.is_object() => {
                *current = merge(current, value);
            }
            Some(_) => {}
        }
    }

    merged
}
