//! Job entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use formwork::{FormModel, Value};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::{as_datetime, as_decimal, as_string};
use crate::error::ParseEnumError;

/// A transport job as edited in the create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub description: String,
    pub customer_id: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub pickup_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    /// Cargo weight in kilograms.
    pub weight: Option<f64>,
    /// Declared cargo value.
    pub value: Option<Decimal>,
    pub priority: Option<JobPriority>,
    pub status: JobStatus,
    pub special_instructions: String,
}

/// Job urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPriority {
    Low,
    Normal,
    High,
    Urgent,
}

/// Job progress status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl JobPriority {
    /// The wire string for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl JobStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(ParseEnumError::new("job priority", other)),
        }
    }
}

impl FromStr for JobStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseEnumError::new("job status", other)),
        }
    }
}

impl FormModel for Job {
    fn get(&self, field: &str) -> Value {
        match field {
            "title" => Value::from(self.title.clone()),
            "description" => Value::from(self.description.clone()),
            "customer_id" => Value::from(self.customer_id.clone()),
            "pickup_address" => Value::from(self.pickup_address.clone()),
            "delivery_address" => Value::from(self.delivery_address.clone()),
            "pickup_date" => Value::from(self.pickup_date),
            "delivery_date" => Value::from(self.delivery_date),
            "weight" => Value::from(self.weight),
            "value" => Value::from(self.value),
            "priority" => Value::from(self.priority.map(|p| p.as_str())),
            "status" => Value::from(self.status.as_str()),
            "special_instructions" => Value::from(self.special_instructions.clone()),
            _ => Value::Null,
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        match field {
            "title" => self.title = as_string(&value).unwrap_or_default(),
            "description" => self.description = as_string(&value).unwrap_or_default(),
            "customer_id" => self.customer_id = as_string(&value).unwrap_or_default(),
            "pickup_address" => self.pickup_address = as_string(&value).unwrap_or_default(),
            "delivery_address" => self.delivery_address = as_string(&value).unwrap_or_default(),
            "pickup_date" => self.pickup_date = as_datetime(&value),
            "delivery_date" => self.delivery_date = as_datetime(&value),
            "weight" => self.weight = value.as_number(),
            "value" => self.value = as_decimal(&value),
            "priority" => self.priority = value.as_str().and_then(|s| s.parse().ok()),
            "status" => {
                if let Some(status) = value.as_str().and_then(|s| s.parse().ok()) {
                    self.status = status;
                }
            }
            "special_instructions" => {
                self.special_instructions = as_string(&value).unwrap_or_default();
            }
            _ => {}
        }
    }
}
