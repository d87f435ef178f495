//! Tests for the entity FormModel implementations.

use formwork::{FormModel, Value};
use freightdesk_lib::forms;
use freightdesk_lib::model::{
    Customer, Transportation, Vehicle, VehicleStatus, VehicleType,
};
use rust_decimal::Decimal;

#[test]
fn test_customer_field_roundtrip() {
    let mut customer = Customer::default();

    customer.set("name", Value::from("Acme Co"));
    customer.set("credit_limit", Value::from("1000"));

    assert_eq!(customer.name, "Acme Co");
    assert_eq!(customer.credit_limit, Some(Decimal::from(1000)));
    assert_eq!(customer.get("name"), Value::from("Acme Co"));
    assert_eq!(
        customer.get("credit_limit"),
        Value::Decimal(Decimal::from(1000))
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut customer = Customer::default();

    customer.set("no_such_field", Value::from("x"));

    assert_eq!(customer, Customer::default());
    assert_eq!(customer.get("no_such_field"), Value::Null);
}

#[test]
fn test_vehicle_typed_setters_parse_form_strings() {
    let mut vehicle = Vehicle::default();

    vehicle.set("vehicle_type", Value::from("truck"));
    vehicle.set("capacity", Value::from("12000"));
    vehicle.set("year", Value::from("2019"));
    vehicle.set("status", Value::from("in_use"));

    assert_eq!(vehicle.vehicle_type, Some(VehicleType::Truck));
    assert_eq!(vehicle.capacity, Some(12000.0));
    assert_eq!(vehicle.year, Some(2019));
    assert_eq!(vehicle.status, VehicleStatus::InUse);

    // Garbage select values leave the field unset rather than guessing.
    vehicle.set("vehicle_type", Value::from("zeppelin"));
    assert_eq!(vehicle.vehicle_type, None);
}

#[test]
fn test_status_enum_parse_errors_name_the_input() {
    let err = "parked".parse::<VehicleStatus>().unwrap_err();
    assert_eq!(err.to_string(), "unknown vehicle status value: 'parked'");
}

#[test]
fn test_waypoint_list_edit_through_form() {
    let initial = Transportation {
        waypoints: vec!["Warehouse A".to_string()],
        ..Default::default()
    };
    let form = forms::transportation_form(initial).build();

    // The dialog reads the list, appends a stop, and writes it back.
    let Value::List(mut stops) = form.values().get("waypoints") else {
        panic!("waypoints must read back as a list");
    };
    stops.push(Value::from("Depot B"));
    form.set_field_value("waypoints", Value::List(stops));

    assert_eq!(
        form.values().waypoints,
        vec!["Warehouse A".to_string(), "Depot B".to_string()]
    );
}

#[test]
fn test_total_cost_sums_present_fields() {
    let record = Transportation {
        fuel_cost: Some(Decimal::from(120)),
        toll_cost: None,
        other_costs: Some(Decimal::from(30)),
        ..Default::default()
    };

    assert_eq!(record.total_cost(), Decimal::from(150));
}

#[test]
fn test_status_roundtrips_through_wire_strings() {
    for status in [
        VehicleStatus::Available,
        VehicleStatus::InUse,
        VehicleStatus::Maintenance,
        VehicleStatus::Inactive,
    ] {
        assert_eq!(status.as_str().parse::<VehicleStatus>().unwrap(), status);
    }
}
