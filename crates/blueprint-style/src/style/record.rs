//! Style records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::mapper::map_styles_to_classes;
use super::merge::merge_maps;
use super::property::{Breakpoint, Property};
use crate::tokens::TokenRegistry;

/// A declarative style record.
///
/// Maps property keys to loosely-typed values, exactly as an editor would
/// store them. Recognized keys are listed by [`Property`]; `sm`, `md` and
/// `lg` hold nested records applied from that breakpoint up. Anything else
/// is carried along (and merged) but never mapped to a class.
///
/// Records are plain values: mapping and merging never mutate them.
///
/// # Example
///
/// ```rust
/// use blueprint_style::{Breakpoint, Styles, TokenRegistry};
///
/// let styles = Styles::new()
///     .with("p", 2)
///     .with("bg", "primary")
///     .with_breakpoint(Breakpoint::Sm, Styles::new().with("p", 3));
///
/// assert_eq!(styles.to_classes(TokenRegistry::builtin()), "p-2 bg-primary sm:p-3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(Map<String, Value>);

impl Styles {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Parses a record from JSON text.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Sets a key, returning the updated record for chaining.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Sets a breakpoint override block, returning the updated record.
    pub fn with_breakpoint(mut self, breakpoint: Breakpoint, block: Styles) -> Self {
        self.0
            .insert(breakpoint.key().to_string(), Value::Object(block.0));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value of a recognized property in the base block.
    pub fn property(&self, property: Property) -> Option<&Value> {
        self.0.get(property.key())
    }

    /// The override block for a breakpoint, if present and a record.
    pub fn breakpoint(&self, breakpoint: Breakpoint) -> Option<Styles> {
        self.block(Some(breakpoint)).cloned().map(Self)
    }

    /// The declarations of the base block (`None`) or a breakpoint block.
    pub(crate) fn block(&self, breakpoint: Option<Breakpoint>) -> Option<&Map<String, Value>> {
        match breakpoint {
            None => Some(&self.0),
            Some(bp) => self.0.get(bp.key()).and_then(Value::as_object),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys that are neither a recognized property nor a breakpoint block.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.keys()
            .filter(|key| Property::from_key(key).is_none() && Breakpoint::from_key(key).is_none())
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Fills gaps in this record from `incoming` without overwriting
    /// anything already set. See [`merge`](crate::merge).
    pub fn merge_missing(&self, incoming: &Styles) -> Styles {
        Self(merge_maps(&self.0, &incoming.0))
    }

    /// Maps this record to its utility class string.
    pub fn to_classes(&self, tokens: &TokenRegistry) -> String {
        map_styles_to_classes(self, tokens)
    }
}

impl From<Map<String, Value>> for Styles {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Styles> for Value {
    fn from(styles: Styles) -> Self {
        styles.into_value()
    }
}

impl FromIterator<(String, Value)> for Styles {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
