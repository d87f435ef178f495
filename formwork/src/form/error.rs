//! Submission error types

use crate::validation::Errors;

/// Why a [`submit`](super::Form::submit) call did not complete.
///
/// Validation failures and handler failures are deliberately kept apart:
/// `Invalid` carries the recomputed error map for the UI to render, while
/// `Handler` surfaces a failure that happened *after* the form was already
/// valid — it never writes into the per-field error map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; the handler was not invoked.
    #[error("form failed validation with {} error(s)", .0.len())]
    Invalid(Errors),

    /// A submission is already in flight; nothing was validated or invoked.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The submit handler reported a failure.
    #[error("submission failed: {0}")]
    Handler(String),
}

impl SubmitError {
    /// Returns the validation errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&Errors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
