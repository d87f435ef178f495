//! Tests for the per-entity dialog schemas.

use std::sync::Arc;
use std::sync::Mutex;

use formwork::validation::validate_form;
use freightdesk_lib::forms;
use freightdesk_lib::model::{Customer, Job, Transportation, Vehicle};
use freightdesk_lib::schemas;
use rust_decimal::Decimal;

fn valid_customer() -> Customer {
    Customer {
        name: "Acme Co".to_string(),
        email: "a@b.com".to_string(),
        phone: "0812345678".to_string(),
        address: "123 Main St".to_string(),
        credit_limit: Some(Decimal::from(1000)),
        ..Default::default()
    }
}

#[test]
fn test_valid_customer_passes_clean() {
    let errors = validate_form(&valid_customer(), &schemas::customer_schema());
    assert!(errors.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_valid_customer_submits_exactly_once() {
    let seen = Arc::new(Mutex::new(Vec::<Customer>::new()));
    let seen_in_handler = Arc::clone(&seen);

    let form = forms::customer_form(valid_customer())
        .on_submit(move |customer: Customer| {
            let seen = Arc::clone(&seen_in_handler);
            async move {
                seen.lock().unwrap().push(customer);
                Ok(())
            }
        })
        .build();

    form.submit().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], valid_customer());
}

#[test]
fn test_empty_customer_fails_all_required_fields() {
    let form = forms::customer_form(Customer::default()).build();

    assert!(!form.validate_all());

    let errors = form.errors();
    assert_eq!(errors.get("name"), Some("This field is required"));
    assert_eq!(errors.get("email"), Some("This field is required"));
    assert_eq!(errors.get("phone"), Some("This field is required"));
    assert_eq!(errors.get("address"), Some("This field is required"));
    // credit_limit is optional and absent, so it stays clean.
    assert!(!errors.contains("credit_limit"));
}

#[test]
fn test_customer_email_and_credit_limit_constraints() {
    let mut customer = valid_customer();
    customer.email = "not-an-email".to_string();
    customer.credit_limit = Some(Decimal::from(-50));

    let errors = validate_form(&customer, &schemas::customer_schema());
    assert_eq!(errors.get("email"), Some("Invalid email format"));
    assert_eq!(errors.get("credit_limit"), Some("Value must be at least 0"));
}

#[test]
fn test_vehicle_year_bounds() {
    let form = forms::vehicle_form(Vehicle::default())
        .validate_on_change(true)
        .build();

    form.set_field_value("year", "1899");
    assert_eq!(
        form.errors().get("year"),
        Some("Value must be at least 1900")
    );
    // Only the changed field gained an error entry.
    assert_eq!(form.errors().len(), 1);

    form.set_field_value("year", "2020");
    assert!(!form.errors().contains("year"));
}

#[test]
fn test_vehicle_license_plate_pattern() {
    let schema = schemas::vehicle_schema();
    let mut vehicle = Vehicle {
        license_plate: "ABC-1234".to_string(),
        ..Default::default()
    };
    assert!(!validate_form(&vehicle, &schema).contains("license_plate"));

    // Case-insensitive match.
    vehicle.license_plate = "abc 1234".to_string();
    assert!(!validate_form(&vehicle, &schema).contains("license_plate"));

    vehicle.license_plate = "abc_1234".to_string();
    assert_eq!(
        validate_form(&vehicle, &schema).get("license_plate"),
        Some("Invalid format")
    );
}

#[test]
fn test_job_schema_required_and_optional_fields() {
    let errors = validate_form(&Job::default(), &schemas::job_schema());

    for field in [
        "title",
        "customer_id",
        "pickup_address",
        "delivery_address",
        "priority",
    ] {
        assert_eq!(errors.get(field), Some("This field is required"), "{field}");
    }
    // Optional fields stay clean when absent.
    assert!(!errors.contains("description"));
    assert!(!errors.contains("weight"));
    assert!(!errors.contains("value"));
}

#[test]
fn test_job_weight_lower_bound() {
    let job = Job {
        weight: Some(0.05),
        ..Default::default()
    };

    let errors = validate_form(&job, &schemas::job_schema());
    assert_eq!(errors.get("weight"), Some("Value must be at least 0.1"));
}

#[test]
fn test_transportation_cost_bounds() {
    let record = Transportation {
        distance: Some(0.05),
        fuel_cost: Some(Decimal::from(-1)),
        ..Default::default()
    };

    let errors = validate_form(&record, &schemas::transportation_schema());
    assert_eq!(errors.get("distance"), Some("Value must be at least 0.1"));
    assert_eq!(errors.get("fuel_cost"), Some("Value must be at least 0"));
    assert!(!errors.contains("toll_cost"));
}

#[test]
fn test_transportation_required_fields() {
    let errors = validate_form(&Transportation::default(), &schemas::transportation_schema());

    for field in ["job_id", "vehicle_id", "driver_id", "start_date"] {
        assert_eq!(errors.get(field), Some("This field is required"), "{field}");
    }
}
