//! Per-entity validation schemas
//!
//! One hand-written schema per dialog, mirroring the business constraints the
//! backend enforces. Constructed fresh per form open; the year upper bound is
//! evaluated at construction so a form opened around new year picks up the
//! new bound.

use chrono::{Datelike, Utc};
use formwork::validation::{Rule, Schema};

/// Customer create/edit dialog schema.
pub fn customer_schema() -> Schema {
    Schema::new()
        .field("name", Rule::new().required().min_length(2).max_length(100))
        .field("email", Rule::new().required().email())
        .field("phone", Rule::new().required().phone())
        .field(
            "address",
            Rule::new().required().min_length(5).max_length(255),
        )
        .field("credit_limit", Rule::new().min(0.0))
}

/// Vehicle create/edit dialog schema.
pub fn vehicle_schema() -> Schema {
    let max_year = f64::from(Utc::now().year() + 1);
    Schema::new()
        .field(
            "license_plate",
            Rule::new()
                .required()
                .min_length(3)
                .max_length(20)
                .pattern(r"(?i)^[A-Z0-9\-\s]+$"),
        )
        .field("vehicle_type", Rule::new().required())
        .field("capacity", Rule::new().required().min(1.0).max(100_000.0))
        .field("fuel_type", Rule::new().required())
        .field("year", Rule::new().required().min(1900.0).max(max_year))
        .field("driver_id", Rule::new().required())
}

/// Job create/edit dialog schema.
pub fn job_schema() -> Schema {
    Schema::new()
        .field("title", Rule::new().required().min_length(3).max_length(100))
        .field("description", Rule::new().max_length(1000))
        .field("customer_id", Rule::new().required())
        .field(
            "pickup_address",
            Rule::new().required().min_length(5).max_length(255),
        )
        .field(
            "delivery_address",
            Rule::new().required().min_length(5).max_length(255),
        )
        .field("weight", Rule::new().min(0.1).max(100_000.0))
        .field("value", Rule::new().min(0.0))
        .field("priority", Rule::new().required())
}

/// Transportation create/edit dialog schema.
pub fn transportation_schema() -> Schema {
    Schema::new()
        .field("job_id", Rule::new().required())
        .field("vehicle_id", Rule::new().required())
        .field("driver_id", Rule::new().required())
        .field("start_date", Rule::new().required())
        .field("distance", Rule::new().min(0.1))
        .field("fuel_cost", Rule::new().min(0.0))
        .field("toll_cost", Rule::new().min(0.0))
        .field("other_costs", Rule::new().min(0.0))
}
