//! Typed entity models
//!
//! Each entity implements [`formwork::FormModel`] with an explicit per-field
//! match, so form edits flow through statically-typed conversions. Setting an
//! unknown field is a no-op; reading one yields `Value::Null`.

mod customer;
mod job;
mod transportation;
mod vehicle;

pub use customer::{Customer, CustomerStatus};
pub use job::{Job, JobPriority, JobStatus};
pub use transportation::{Transportation, TransportationStatus};
pub use vehicle::{FuelType, Vehicle, VehicleStatus, VehicleType};

use chrono::{DateTime, Utc};
use formwork::Value;
use rust_decimal::Decimal;

// Conversion helpers shared by the FormModel impls. Form inputs deliver raw
// strings, so the numeric setters also accept parseable text.

pub(crate) fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(n) => Some(*n as i64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(d) => Some(*d),
        Value::Int(n) => Some(Decimal::from(*n)),
        Value::Float(n) => Decimal::from_f64_retain(*n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
