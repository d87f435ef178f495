//! Customer entity

use std::fmt;
use std::str::FromStr;

use formwork::{FormModel, Value};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::{as_decimal, as_string};
use crate::error::ParseEnumError;

/// A customer as edited in the create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub credit_limit: Option<Decimal>,
    pub status: CustomerStatus,
}

/// Customer account status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

impl CustomerStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseEnumError::new("customer status", other)),
        }
    }
}

impl FormModel for Customer {
    fn get(&self, field: &str) -> Value {
        match field {
            "name" => Value::from(self.name.clone()),
            "email" => Value::from(self.email.clone()),
            "phone" => Value::from(self.phone.clone()),
            "address" => Value::from(self.address.clone()),
            "credit_limit" => Value::from(self.credit_limit),
            "status" => Value::from(self.status.as_str()),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        match field {
            "name" => self.name = as_string(&value).unwrap_or_default(),
            "email" => self.email = as_string(&value).unwrap_or_default(),
            "phone" => self.phone = as_string(&value).unwrap_or_default(),
            "address" => self.address = as_string(&value).unwrap_or_default(),
            "credit_limit" => self.credit_limit = as_decimal(&value),
            "status" => {
                if let Some(status) = value.as_str().and_then(|s| s.parse().ok()) {
                    self.status = status;
                }
            }
            _ => {}
        }
    }
}
