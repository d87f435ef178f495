//! Customer dialog example.
//!
//! Drives a customer create form the way the admin UI would: field edits,
//! blur validation, a failed submit, then a fix and a successful submit.
//!
//! Run with: cargo run --example customer_form

use std::fs::File;

use freightdesk_lib::forms;
use freightdesk_lib::model::Customer;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("customer_form.log").expect("create log file"),
    );

    let form = forms::customer_form(Customer::default())
        .on_submit(|customer: Customer| async move {
            // The real UI would POST to the backend here.
            println!("-> submitting customer '{}'", customer.name);
            Ok(())
        })
        .build();

    form.set_field_value("name", "Acme Co");
    form.set_field_value("email", "not-an-email");
    form.set_field_touched("email");

    println!("after blur on email:");
    for (field, message) in form.errors().iter() {
        println!("  {field}: {message}");
    }

    match form.submit().await {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("submit blocked: {err}"),
    }

    form.set_field_value("email", "billing@acme.example");
    form.set_field_value("phone", "0812345678");
    form.set_field_value("address", "123 Main St");

    match form.submit().await {
        Ok(()) => println!("customer saved"),
        Err(err) => println!("submit failed: {err}"),
    }
}
