//! Vehicle entity

use std::fmt;
use std::str::FromStr;

use formwork::{FormModel, Value};
use serde::Deserialize;
use serde::Serialize;

use super::{as_i64, as_string};
use crate::error::ParseEnumError;

/// A fleet vehicle as edited in the create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub license_plate: String,
    pub vehicle_type: Option<VehicleType>,
    /// Load capacity in kilograms.
    pub capacity: Option<f64>,
    pub fuel_type: Option<FuelType>,
    pub year: Option<i64>,
    pub driver_id: String,
    pub status: VehicleStatus,
}

/// Vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Truck,
    Van,
    Motorcycle,
    Pickup,
    Trailer,
}

/// Vehicle availability status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Inactive,
}

/// Vehicle fuel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Cng,
}

impl VehicleType {
    /// The wire string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Van => "van",
            Self::Motorcycle => "motorcycle",
            Self::Pickup => "pickup",
            Self::Trailer => "trailer",
        }
    }
}

impl VehicleStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }
}

impl FuelType {
    /// The wire string for this fuel type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Diesel => "diesel",
            Self::Electric => "electric",
            Self::Hybrid => "hybrid",
            Self::Cng => "cng",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truck" => Ok(Self::Truck),
            "van" => Ok(Self::Van),
            "motorcycle" => Ok(Self::Motorcycle),
            "pickup" => Ok(Self::Pickup),
            "trailer" => Ok(Self::Trailer),
            other => Err(ParseEnumError::new("vehicle type", other)),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in_use" => Ok(Self::InUse),
            "maintenance" => Ok(Self::Maintenance),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseEnumError::new("vehicle status", other)),
        }
    }
}

impl FromStr for FuelType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gasoline" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            "hybrid" => Ok(Self::Hybrid),
            "cng" => Ok(Self::Cng),
            other => Err(ParseEnumError::new("fuel type", other)),
        }
    }
}

impl FormModel for Vehicle {
    fn get(&self, field: &str) -> Value {
        match field {
            "license_plate" => Value::from(self.license_plate.clone()),
            "vehicle_type" => Value::from(self.vehicle_type.map(|t| t.as_str())),
            "capacity" => Value::from(self.capacity),
            "fuel_type" => Value::from(self.fuel_type.map(|t| t.as_str())),
            "year" => Value::from(self.year),
            "driver_id" => Value::from(self.driver_id.clone()),
            "status" => Value::from(self.status.as_str()),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        match field {
            "license_plate" => self.license_plate = as_string(&value).unwrap_or_default(),
            "vehicle_type" => self.vehicle_type = value.as_str().and_then(|s| s.parse().ok()),
            "capacity" => self.capacity = value.as_number(),
            "fuel_type" => self.fuel_type = value.as_str().and_then(|s| s.parse().ok()),
            "year" => self.year = as_i64(&value),
            "driver_id" => self.driver_id = as_string(&value).unwrap_or_default(),
            "status" => {
                if let Some(status) = value.as_str().and_then(|s| s.parse().ok()) {
                    self.status = status;
                }
            }
            _ => {}
        }
    }
}
