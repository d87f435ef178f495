//! Transportation-management domain layer.
//!
//! Typed entity models (customer, vehicle, job, transportation), the
//! hand-written validation schema for each entity's dialog, and helpers that
//! wire an entity into a pre-configured [`formwork`] form. The admin frontend
//! consumes these; the backend API it talks to is out of scope here.

pub mod error;
pub mod forms;
pub mod model;
pub mod schemas;

pub use error::ParseEnumError;
