//! Framework-agnostic form state and validation.
//!
//! Two pieces, the second consuming the first: a pure declarative
//! [`validation`] rule engine, and a stateful [`form`] controller that owns
//! one dialog's values, errors, touched flags, and submission flag. The UI
//! layer renders from [`form::Form::snapshot`] and feeds events back through
//! the controller's operations; it never mutates values directly.

pub mod form;
pub mod model;
pub mod validation;
pub mod value;

pub use form::{Form, FormOptions, FormSnapshot, SubmitError};
pub use model::{FormModel, Values};
pub use value::Value;

pub mod prelude {
    pub use crate::form::{Form, FormOptions, FormSnapshot, SubmitError};
    pub use crate::model::{FormModel, Values};
    pub use crate::validation::{
        Errors, Rule, Schema, has_errors, validate_field, validate_form,
    };
    pub use crate::value::Value;
}
