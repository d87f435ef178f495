//! Declarative validation for forms.
//!
//! A [`Schema`] maps field names to [`Rule`]s; the engine functions evaluate
//! values against rules without touching any state. Checks run in a fixed
//! priority order and a field reports at most one violation per pass.
//!
//! # Example
//!
//! ```
//! use formwork::validation::{Rule, Schema, validate_form, has_errors};
//! use formwork::Values;
//!
//! let schema = Schema::new()
//!     .field("name", Rule::new().required().min_length(2))
//!     .field("email", Rule::new().required().email());
//!
//! let values = Values::new().with("name", "Acme Co").with("email", "a@b.com");
//! let errors = validate_form(&values, &schema);
//! assert!(!has_errors(&errors));
//! ```

mod engine;
mod errors;
mod rule;
mod schema;

pub use engine::{validate_field, validate_form};
pub use errors::{Errors, has_errors};
pub use rule::{CustomCheck, Rule};
pub use schema::Schema;
