//! Form controller state

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::error::SubmitError;
use super::options::{FormOptions, SubmitHandler};
use crate::model::FormModel;
use crate::validation::{Errors, Schema, has_errors, validate_field, validate_form};
use crate::value::Value;

/// Mutable session state behind the lock.
struct Inner<T> {
    values: T,
    errors: Errors,
    touched: HashMap<String, bool>,
    is_submitting: bool,
}

/// The read-only view a presentation layer renders from.
#[derive(Debug, Clone)]
pub struct FormSnapshot<T> {
    /// Current field values.
    pub values: T,
    /// Current per-field errors.
    pub errors: Errors,
    /// Fields that have lost focus or been explicitly validated at least once.
    pub touched: HashMap<String, bool>,
    /// `true` while the submit handler is running.
    pub is_submitting: bool,
}

impl<T> FormSnapshot<T> {
    /// Returns `true` if no field currently has an error.
    pub fn is_valid(&self) -> bool {
        !has_errors(&self.errors)
    }

    /// Returns `true` if the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }
}

/// Stateful controller for one form instance.
///
/// Created fresh per dialog open via [`FormOptions`], cheap to clone, and
/// safe to share with event handlers: clones observe the same session.
/// Lock poisoning is recovered rather than propagated, so no operation
/// panics under well-formed schemas.
///
/// Per-field lifecycle: untouched → touched, valid ↔ invalid as values
/// change; only [`reset`](Form::reset) returns a field to untouched.
pub struct Form<T> {
    inner: Arc<RwLock<Inner<T>>>,
    initial_values: T,
    schema: Option<Arc<Schema>>,
    validate_on_change: bool,
    validate_on_blur: bool,
    on_submit: Option<SubmitHandler<T>>,
}

impl<T: FormModel> Form<T> {
    pub(super) fn from_options(options: FormOptions<T>) -> Self {
        let inner = Inner {
            values: options.initial_values.clone(),
            errors: Errors::new(),
            touched: HashMap::new(),
            is_submitting: false,
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
            initial_values: options.initial_values,
            schema: options.schema.map(Arc::new),
            validate_on_change: options.validate_on_change,
            validate_on_blur: options.validate_on_blur,
            on_submit: options.on_submit,
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Inner<T>) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Inner<T>) -> R) -> R {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// Re-runs the field's rule against its current value and updates only
    /// that field's error entry. No-op when the schema lacks a rule for it.
    fn revalidate(&self, inner: &mut Inner<T>, field: &str) {
        if let Some(rule) = self.schema.as_deref().and_then(|s| s.rule(field)) {
            let message = validate_field(&inner.values.get(field), rule);
            inner.errors.set(field, message);
        }
    }

    // =========================================================================
    // Snapshot accessors
    // =========================================================================

    /// Clones out the full `{values, errors, touched, is_submitting}` view.
    pub fn snapshot(&self) -> FormSnapshot<T> {
        self.read(|inner| FormSnapshot {
            values: inner.values.clone(),
            errors: inner.errors.clone(),
            touched: inner.touched.clone(),
            is_submitting: inner.is_submitting,
        })
    }

    /// Clones out the current values.
    pub fn values(&self) -> T {
        self.read(|inner| inner.values.clone())
    }

    /// Clones out the current error map.
    pub fn errors(&self) -> Errors {
        self.read(|inner| inner.errors.clone())
    }

    /// Returns `true` if the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.read(|inner| inner.touched.get(field).copied().unwrap_or(false))
    }

    /// Returns `true` while the submit handler is running.
    pub fn is_submitting(&self) -> bool {
        self.read(|inner| inner.is_submitting)
    }

    /// Returns `true` if no field currently has an error.
    pub fn is_valid(&self) -> bool {
        self.read(|inner| !has_errors(&inner.errors))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces one field's value.
    ///
    /// With `validate_on_change` enabled and a rule present, the field is
    /// re-validated immediately; other fields' errors are never touched.
    pub fn set_field_value(&self, field: &str, value: impl Into<Value>) {
        let value = value.into();
        self.write(|inner| {
            inner.values.set(field, value);
            if self.validate_on_change {
                self.revalidate(inner, field);
            }
        });
    }

    /// Replaces all values at once. No validation runs.
    pub fn set_values(&self, values: T) {
        self.write(|inner| inner.values = values);
    }

    /// Marks a field as touched (invoked on blur).
    ///
    /// With `validate_on_blur` enabled and a rule present, the field is
    /// re-validated immediately.
    pub fn set_field_touched(&self, field: &str) {
        self.write(|inner| {
            inner.touched.insert(field.to_string(), true);
            if self.validate_on_blur {
                self.revalidate(inner, field);
            }
        });
    }

    /// Directly overrides one field's error, bypassing the engine.
    ///
    /// Used to inject server-side errors. `None` clears the entry.
    pub fn set_field_error(&self, field: &str, message: Option<impl Into<String>>) {
        self.write(|inner| inner.errors.set(field, message.map(Into::into)));
    }

    /// Replaces the whole error map, bypassing the engine.
    pub fn set_errors(&self, errors: Errors) {
        self.write(|inner| inner.errors = errors);
    }

    /// Explicit on-demand single-field revalidation.
    ///
    /// Runs regardless of the change/blur flags; used for cross-field rules
    /// that must be recomputed when another field changes.
    pub fn validate_one(&self, field: &str) {
        self.write(|inner| self.revalidate(inner, field));
    }

    /// Validates every schema field against the current values, replaces the
    /// whole error map with the result, and returns whether the form is
    /// error-free. Fields that now pass drop out of the map. Without a
    /// schema this always returns `true`.
    pub fn validate_all(&self) -> bool {
        self.write(|inner| match self.schema.as_deref() {
            Some(schema) => {
                let errors = validate_form(&inner.values, schema);
                let valid = !has_errors(&errors);
                inner.errors = errors;
                valid
            }
            None => true,
        })
    }

    /// Runs the guarded submit flow.
    ///
    /// Re-validates the whole form unconditionally. On failure the handler is
    /// not invoked and the freshly recomputed errors are returned as
    /// [`SubmitError::Invalid`]. On success the handler runs with a clone of
    /// the current values and `is_submitting` held true for its duration; the
    /// flag is cleared whether the handler succeeds or fails. A handler
    /// failure is logged and returned as [`SubmitError::Handler`] — it never
    /// writes into the per-field error map.
    ///
    /// Re-entrancy is guarded in the controller: a call while a submission is
    /// in flight returns [`SubmitError::AlreadySubmitting`] without
    /// validating or invoking the handler.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let handler = self.on_submit.clone();

        let values = self.write(|inner| {
            if inner.is_submitting {
                return Err(SubmitError::AlreadySubmitting);
            }

            if let Some(schema) = self.schema.as_deref() {
                let errors = validate_form(&inner.values, schema);
                let valid = !has_errors(&errors);
                inner.errors = errors;
                if !valid {
                    return Err(SubmitError::Invalid(inner.errors.clone()));
                }
            }

            if handler.is_some() {
                inner.is_submitting = true;
            }
            Ok(inner.values.clone())
        })?;

        let Some(handler) = handler else {
            return Ok(());
        };

        let result = handler(values).await;
        self.write(|inner| inner.is_submitting = false);

        result.map_err(|message| {
            log::error!("form submission failed: {message}");
            SubmitError::Handler(message)
        })
    }

    /// Restores the construction-time snapshot: initial values, no errors,
    /// nothing touched, not submitting. Idempotent.
    pub fn reset(&self) {
        self.write(|inner| {
            inner.values = self.initial_values.clone();
            inner.errors.clear_all();
            inner.touched.clear();
            inner.is_submitting = false;
        });
    }
}

impl<T: Clone> Clone for Form<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            initial_values: self.initial_values.clone(),
            schema: self.schema.clone(),
            validate_on_change: self.validate_on_change,
            validate_on_blur: self.validate_on_blur,
            on_submit: self.on_submit.clone(),
        }
    }
}
