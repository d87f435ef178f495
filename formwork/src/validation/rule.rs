//! Validation rule descriptor

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::value::Value;

/// A caller-supplied check, invoked last; its returned message wins.
pub type CustomCheck = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Declarative constraints for one form field.
///
/// Built fluently and attached to a field name in a [`Schema`](super::Schema).
/// Immutable once constructed. Constraints that do not apply to the value's
/// type are skipped: `min`/`max` only test numeric values, the length,
/// pattern, and format checks only test strings.
///
/// # Example
///
/// ```
/// use formwork::validation::Rule;
///
/// let rule = Rule::new().required().min_length(3).max_length(20);
/// ```
#[derive(Clone, Default)]
pub struct Rule {
    pub(crate) required: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) email: bool,
    pub(crate) phone: bool,
    pub(crate) url: bool,
    pub(crate) custom: Option<CustomCheck>,
}

impl Rule {
    /// Creates an empty rule with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must not be null or an empty string.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Inclusive numeric lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive numeric upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Inclusive minimum string length, in characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Inclusive maximum string length, in characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// The string value must match the given regex.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is not a valid regex; a malformed pattern in a
    /// hand-written schema is a programming error caught at construction.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("Invalid regex pattern"));
        self
    }

    /// The string value must be a plausible email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// The string value must be a phone number (separators allowed).
    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }

    /// The string value must parse as an absolute URL.
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// Attach a custom check, run after all built-in constraints.
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("required", &self.required)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("url", &self.url)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}
