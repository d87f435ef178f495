//! Pure rule evaluation

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

use super::errors::Errors;
use super::rule::Rule;
use super::schema::Schema;
use crate::model::FormModel;
use crate::value::Value;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("Invalid regex pattern"));

/// Evaluates a single value against a rule.
///
/// Checks run in a fixed priority order and the first failure wins, so a
/// field never reports more than one violation per call:
///
/// 1. `required` — null or empty string fails; a *missing optional* value
///    short-circuits with no error, since absence only matters when required.
/// 2. `min`/`max` — numeric values only.
/// 3. `min_length`/`max_length` — string values only.
/// 4. `pattern`, then `email`, `phone`, `url` — string values only.
/// 5. `custom` — runs last; its message wins.
///
/// Pure and deterministic: same `(value, rule)` always yields the same
/// result. A panicking custom check is a caller bug and propagates.
pub fn validate_field(value: &Value, rule: &Rule) -> Option<String> {
    if rule.required && value.is_empty() {
        return Some("This field is required".to_string());
    }

    if value.is_empty() {
        return None;
    }

    if let (Some(min), Some(n)) = (rule.min, value.as_number())
        && n < min
    {
        return Some(format!("Value must be at least {min}"));
    }

    if let (Some(max), Some(n)) = (rule.max, value.as_number())
        && n > max
    {
        return Some(format!("Value must be at most {max}"));
    }

    if let (Some(min), Some(s)) = (rule.min_length, value.as_str())
        && s.chars().count() < min
    {
        return Some(format!("Must be at least {min} characters"));
    }

    if let (Some(max), Some(s)) = (rule.max_length, value.as_str())
        && s.chars().count() > max
    {
        return Some(format!("Must be at most {max} characters"));
    }

    if let (Some(pattern), Some(s)) = (rule.pattern.as_ref(), value.as_str())
        && !pattern.is_match(s)
    {
        return Some("Invalid format".to_string());
    }

    if rule.email
        && let Some(s) = value.as_str()
        && !is_valid_email(s)
    {
        return Some("Invalid email format".to_string());
    }

    if rule.phone
        && let Some(s) = value.as_str()
        && !PHONE_PATTERN.is_match(&normalize_phone(s))
    {
        return Some("Invalid phone number format".to_string());
    }

    if rule.url
        && let Some(s) = value.as_str()
        && url::Url::parse(s).is_err()
    {
        return Some("Invalid URL format".to_string());
    }

    if let Some(custom) = &rule.custom {
        return custom(value);
    }

    None
}

/// Validates every field the schema knows about and collects the failures.
///
/// Only schema fields are visited: values without a rule are never validated
/// and never appear in the result. A schema field the model does not know
/// reads as [`Value::Null`] and is judged like any other missing value.
pub fn validate_form<T: FormModel>(values: &T, schema: &Schema) -> Errors {
    let mut errors = Errors::new();

    for (field, rule) in schema.fields() {
        if let Some(message) = validate_field(&values.get(field), rule) {
            errors.set(field, Some(message));
        }
    }

    errors
}

/// Conservative email check: RFC-valid address with a dot in the domain.
fn is_valid_email(s: &str) -> bool {
    let domain_has_dot = s
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    domain_has_dot && EmailAddress::is_valid(s)
}

/// Strips spaces, dashes, and parentheses, then drops a single national
/// trunk `0` prefix so local-format numbers like `0812345678` match the
/// leading-digit-non-zero pattern.
fn normalize_phone(s: &str) -> String {
    let stripped: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    match stripped.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => stripped,
    }
}
