//! Tests for the pure validation rule engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formwork::validation::{Rule, Schema, has_errors, validate_field, validate_form};
use formwork::{Value, Values};

#[test]
fn test_repeated_calls_are_pure() {
    let rule = Rule::new().required().min_length(3).email();
    let value = Value::from("a@b.com");

    let first = validate_field(&value, &rule);
    for _ in 0..10 {
        assert_eq!(validate_field(&value, &rule), first);
    }
}

#[test]
fn test_required_rejects_null_and_empty_string() {
    let rule = Rule::new().required();

    assert_eq!(
        validate_field(&Value::Null, &rule).as_deref(),
        Some("This field is required")
    );
    assert_eq!(
        validate_field(&Value::from(""), &rule).as_deref(),
        Some("This field is required")
    );
    assert_eq!(validate_field(&Value::from("x"), &rule), None);
}

#[test]
fn test_required_short_circuits_before_other_checks() {
    // The custom check would fail everything; it must never run when the
    // required check has already reported the field missing.
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_rule = Arc::clone(&calls);
    let rule = Rule::new().required().email().custom(move |_| {
        calls_in_rule.fetch_add(1, Ordering::SeqCst);
        Some("custom failure".to_string())
    });

    assert_eq!(
        validate_field(&Value::from(""), &rule).as_deref(),
        Some("This field is required")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_optional_value_passes_without_running_checks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_rule = Arc::clone(&calls);
    let rule = Rule::new().min_length(3).custom(move |_| {
        calls_in_rule.fetch_add(1, Ordering::SeqCst);
        Some("custom failure".to_string())
    });

    assert_eq!(validate_field(&Value::Null, &rule), None);
    assert_eq!(validate_field(&Value::from(""), &rule), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_numeric_range_messages() {
    let rule = Rule::new().min(0.1).max(100_000.0);

    assert_eq!(
        validate_field(&Value::from(-5.0), &rule).as_deref(),
        Some("Value must be at least 0.1")
    );
    assert_eq!(
        validate_field(&Value::from(200_000i64), &rule).as_deref(),
        Some("Value must be at most 100000")
    );
    assert_eq!(validate_field(&Value::from(50.0), &rule), None);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let rule = Rule::new().min(1.0).max(10.0);

    assert_eq!(validate_field(&Value::from(1.0), &rule), None);
    assert_eq!(validate_field(&Value::from(10.0), &rule), None);
}

#[test]
fn test_numeric_strings_participate_in_range_checks() {
    let rule = Rule::new().min(1900.0);

    assert_eq!(
        validate_field(&Value::from("1899"), &rule).as_deref(),
        Some("Value must be at least 1900")
    );
    assert_eq!(validate_field(&Value::from("1950"), &rule), None);
    // Non-numeric text is not a number and skips the range check.
    assert_eq!(validate_field(&Value::from("soon"), &rule), None);
}

#[test]
fn test_length_messages() {
    let rule = Rule::new().min_length(3).max_length(5);

    assert_eq!(
        validate_field(&Value::from("ab"), &rule).as_deref(),
        Some("Must be at least 3 characters")
    );
    assert_eq!(
        validate_field(&Value::from("abcdef"), &rule).as_deref(),
        Some("Must be at most 5 characters")
    );
    assert_eq!(validate_field(&Value::from("abcd"), &rule), None);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let rule = Rule::new().max_length(3);

    assert_eq!(validate_field(&Value::from("åäö"), &rule), None);
}

#[test]
fn test_length_checks_skip_non_strings() {
    let rule = Rule::new().min_length(5);

    assert_eq!(validate_field(&Value::from(42i64), &rule), None);
}

#[test]
fn test_pattern() {
    let rule = Rule::new().pattern(r"(?i)^[A-Z0-9\-\s]+$");

    assert_eq!(validate_field(&Value::from("ABC-1234"), &rule), None);
    assert_eq!(validate_field(&Value::from("abc 1234"), &rule), None);
    assert_eq!(
        validate_field(&Value::from("abc_1234"), &rule).as_deref(),
        Some("Invalid format")
    );
}

#[test]
fn test_email() {
    let rule = Rule::new().required().email();

    assert_eq!(validate_field(&Value::from("a@b.com"), &rule), None);
    assert_eq!(
        validate_field(&Value::from("not-an-email"), &rule).as_deref(),
        Some("Invalid email format")
    );
    // Domain must contain a dot.
    assert_eq!(
        validate_field(&Value::from("a@b"), &rule).as_deref(),
        Some("Invalid email format")
    );
    assert_eq!(
        validate_field(&Value::from("a b@c.com"), &rule).as_deref(),
        Some("Invalid email format")
    );
}

#[test]
fn test_required_wins_over_email() {
    let rule = Rule::new().required().email();

    assert_eq!(
        validate_field(&Value::from(""), &rule).as_deref(),
        Some("This field is required")
    );
}

#[test]
fn test_phone() {
    let rule = Rule::new().phone();

    assert_eq!(validate_field(&Value::from("+66812345678"), &rule), None);
    assert_eq!(validate_field(&Value::from("0812345678"), &rule), None);
    assert_eq!(validate_field(&Value::from("(08) 1234-5678"), &rule), None);
    assert_eq!(
        validate_field(&Value::from("phone me"), &rule).as_deref(),
        Some("Invalid phone number format")
    );
    assert_eq!(
        validate_field(&Value::from("0"), &rule).as_deref(),
        Some("Invalid phone number format")
    );
}

#[test]
fn test_url() {
    let rule = Rule::new().url();

    assert_eq!(
        validate_field(&Value::from("https://example.com/x"), &rule),
        None
    );
    assert_eq!(
        validate_field(&Value::from("not a url"), &rule).as_deref(),
        Some("Invalid URL format")
    );
    // Relative references are not absolute URLs.
    assert_eq!(
        validate_field(&Value::from("/relative/path"), &rule).as_deref(),
        Some("Invalid URL format")
    );
}

#[test]
fn test_custom_runs_last_and_its_message_wins() {
    let rule = Rule::new()
        .min_length(2)
        .custom(|v| match v.as_str() {
            Some("forbidden") => Some("That name is taken".to_string()),
            _ => None,
        });

    assert_eq!(
        validate_field(&Value::from("forbidden"), &rule).as_deref(),
        Some("That name is taken")
    );
    assert_eq!(validate_field(&Value::from("fine"), &rule), None);
    // A built-in failure short-circuits before the custom check.
    assert_eq!(
        validate_field(&Value::from("f"), &rule).as_deref(),
        Some("Must be at least 2 characters")
    );
}

#[test]
fn test_first_failure_wins_across_checks() {
    let rule = Rule::new().min_length(10).pattern(r"^\d+$").email();

    // min_length fires first even though pattern and email would also fail.
    assert_eq!(
        validate_field(&Value::from("abc"), &rule).as_deref(),
        Some("Must be at least 10 characters")
    );
}

#[test]
fn test_validate_form_only_visits_schema_fields() {
    let schema = Schema::new().field("name", Rule::new().required());
    let values = Values::new()
        .with("name", "")
        .with("unrelated", "")
        .with("extra", Value::Null);

    let errors = validate_form(&values, &schema);

    assert_eq!(errors.len(), 1);
    assert!(errors.contains("name"));
    assert!(!errors.contains("unrelated"));
    assert!(!errors.contains("extra"));
}

#[test]
fn test_validate_form_treats_absent_fields_as_null() {
    let schema = Schema::new()
        .field("required_field", Rule::new().required())
        .field("optional_field", Rule::new().min_length(3));
    let values = Values::new();

    let errors = validate_form(&values, &schema);

    assert_eq!(
        errors.get("required_field"),
        Some("This field is required")
    );
    assert!(!errors.contains("optional_field"));
}

#[test]
fn test_has_errors_matches_error_count() {
    let schema = Schema::new()
        .field("a", Rule::new().required())
        .field("b", Rule::new().min_length(2));

    let empty = validate_form(&Values::new().with("a", "x").with("b", "xy"), &schema);
    assert!(!has_errors(&empty));
    assert_eq!(empty.len(), 0);

    let failing = validate_form(&Values::new().with("b", "x"), &schema);
    assert!(has_errors(&failing));
    assert_eq!(failing.len(), 2);
}
