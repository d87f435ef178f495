//! Validation schema

use std::collections::HashMap;

use super::rule::Rule;

/// A mapping from field name to its validation rule.
///
/// Defined once per form/entity type by the caller and never mutated by the
/// engine. At most one rule per field; insertion order is irrelevant.
///
/// # Example
///
/// ```
/// use formwork::validation::{Rule, Schema};
///
/// let schema = Schema::new()
///     .field("name", Rule::new().required().min_length(2).max_length(100))
///     .field("credit_limit", Rule::new().min(0.0));
/// assert!(schema.contains("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema(HashMap<String, Rule>);

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Attaches a rule to a field (builder pattern). A repeated field name
    /// replaces the earlier rule.
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.0.insert(name.into(), rule);
        self
    }

    /// Returns the rule for a field, if one exists.
    pub fn rule(&self, field: &str) -> Option<&Rule> {
        self.0.get(field)
    }

    /// Returns `true` if the schema has a rule for the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates over all fields and their rules.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields with rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the schema has no rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
