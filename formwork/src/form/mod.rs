//! Form state controller.
//!
//! A [`Form`] owns one dialog's session state: current values, the derived
//! error map, per-field touched flags, and the submission-in-progress flag.
//! The UI layer reads [`Form::snapshot`] on every render and calls the
//! mutation operations from its field events; field-level validation always
//! completes before the operation returns, so a snapshot read immediately
//! afterward is consistent.
//!
//! # Example
//!
//! ```
//! use formwork::form::FormOptions;
//! use formwork::validation::{Rule, Schema};
//! use formwork::Values;
//!
//! let form = FormOptions::new(Values::new().with("name", ""))
//!     .schema(Schema::new().field("name", Rule::new().required()))
//!     .build();
//!
//! form.set_field_value("name", "Acme Co");
//! assert!(form.validate_all());
//! ```

mod error;
mod options;
mod state;

pub use error::SubmitError;
pub use options::{BoxFuture, FormOptions, SubmitHandler};
pub use state::{Form, FormSnapshot};
