//! FormModel trait and the dynamic Values map

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::value::Value;

/// The value type backing a form.
///
/// A form is parameterized over its model so that typed entity structs can be
/// edited directly: each implementation maps field names to its own fields
/// with an explicit `match`, keeping every update statically typed. Field
/// names unknown to the model are ignored on [`set`](FormModel::set) and read
/// as [`Value::Null`] — the same outcome as a blank input.
pub trait FormModel: Clone {
    /// Read the current value of a named field.
    fn get(&self, field: &str) -> Value;

    /// Replace the value of a named field.
    fn set(&mut self, field: &str, value: Value);
}

/// A schema-driven dynamic model: field name to [`Value`].
///
/// Useful when no typed struct exists for the form, e.g. ad-hoc dialogs whose
/// shape is defined entirely by their validation schema.
///
/// # Example
///
/// ```
/// use formwork::{Value, Values};
///
/// let values = Values::new()
///     .with("name", "Acme Co")
///     .with("credit_limit", 1000i64);
/// assert_eq!(values.get("name"), Some(&Value::from("Acme Co")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Values(HashMap<String, Value>);

impl Values {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Sets a field value (builder pattern).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `true` if the map contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Number of fields currently present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FormModel for Values {
    fn get(&self, field: &str) -> Value {
        self.0.get(field).cloned().unwrap_or(Value::Null)
    }

    fn set(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
