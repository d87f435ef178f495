//! Transportation record entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use formwork::{FormModel, Value};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::{as_datetime, as_decimal, as_string};
use crate::error::ParseEnumError;

/// One scheduled transport run as edited in the create/edit dialog.
///
/// `waypoints` is the field array edited through [`Value::List`]: the dialog
/// reads the list, adds or removes a stop, and writes the whole list back
/// through `set_field_value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub job_id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Planned distance in kilometers.
    pub distance: Option<f64>,
    pub fuel_cost: Option<Decimal>,
    pub toll_cost: Option<Decimal>,
    pub other_costs: Option<Decimal>,
    pub status: TransportationStatus,
    pub notes: String,
    pub waypoints: Vec<String>,
}

/// Transport run status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportationStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TransportationStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransportationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseEnumError::new("transportation status", other)),
        }
    }
}

impl Transportation {
    /// Total of all cost fields that are present.
    pub fn total_cost(&self) -> Decimal {
        [self.fuel_cost, self.toll_cost, self.other_costs]
            .into_iter()
            .flatten()
            .sum()
    }
}

impl FormModel for Transportation {
    fn get(&self, field: &str) -> Value {
        match field {
            "job_id" => Value::from(self.job_id.clone()),
            "vehicle_id" => Value::from(self.vehicle_id.clone()),
            "driver_id" => Value::from(self.driver_id.clone()),
            "start_date" => Value::from(self.start_date),
            "end_date" => Value::from(self.end_date),
            "distance" => Value::from(self.distance),
            "fuel_cost" => Value::from(self.fuel_cost),
            "toll_cost" => Value::from(self.toll_cost),
            "other_costs" => Value::from(self.other_costs),
            "status" => Value::from(self.status.as_str()),
            "notes" => Value::from(self.notes.clone()),
            "waypoints" => Value::List(
                self.waypoints
                    .iter()
                    .map(|w| Value::from(w.as_str()))
                    .collect(),
            ),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        match field {
            "job_id" => self.job_id = as_string(&value).unwrap_or_default(),
            "vehicle_id" => self.vehicle_id = as_string(&value).unwrap_or_default(),
            "driver_id" => self.driver_id = as_string(&value).unwrap_or_default(),
            "start_date" => self.start_date = as_datetime(&value),
            "end_date" => self.end_date = as_datetime(&value),
            "distance" => self.distance = value.as_number(),
            "fuel_cost" => self.fuel_cost = as_decimal(&value),
            "toll_cost" => self.toll_cost = as_decimal(&value),
            "other_costs" => self.other_costs = as_decimal(&value),
            "status" => {
                if let Some(status) = value.as_str().and_then(|s| s.parse().ok()) {
                    self.status = status;
                }
            }
            "notes" => self.notes = as_string(&value).unwrap_or_default(),
            "waypoints" => {
                if let Value::List(items) = value {
                    self.waypoints = items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect();
                }
            }
            _ => {}
        }
    }
}
