//! Entity form wiring
//!
//! Each helper returns [`FormOptions`] pre-wired with the matching schema.
//! A create dialog seeds with `Default::default()`, an edit dialog with the
//! existing entity; the caller attaches its submit handler and builds.

use formwork::FormOptions;

use crate::model::{Customer, Job, Transportation, Vehicle};
use crate::schemas;

/// Options for a customer dialog seeded with the given values.
pub fn customer_form(initial: Customer) -> FormOptions<Customer> {
    FormOptions::new(initial).schema(schemas::customer_schema())
}

/// Options for a vehicle dialog seeded with the given values.
pub fn vehicle_form(initial: Vehicle) -> FormOptions<Vehicle> {
    FormOptions::new(initial).schema(schemas::vehicle_schema())
}

/// Options for a job dialog seeded with the given values.
pub fn job_form(initial: Job) -> FormOptions<Job> {
    FormOptions::new(initial).schema(schemas::job_schema())
}

/// Options for a transportation dialog seeded with the given values.
pub fn transportation_form(initial: Transportation) -> FormOptions<Transportation> {
    FormOptions::new(initial).schema(schemas::transportation_schema())
}
