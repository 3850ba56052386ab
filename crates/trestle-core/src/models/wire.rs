//! Wire records exchanged with the schedule API.
//!
//! The upstream PHP endpoints are loosely typed: numeric keys arrive either as
//! JSON numbers or as numeric strings, and any field may be missing or
//! `null`. Inbound records therefore keep raw [`serde_json::Value`]s and
//! expose coercing accessors; outbound payloads are strongly typed.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{day::parse_day, TaskInterval};
use crate::error::{Result, TimelineError};

/// Raw task row from `GET /gantt_api.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    #[serde(rename = "L_ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "C_P_ID", default, skip_serializing_if = "Option::is_none")]
    pub lane_id: Option<Value>,
    #[serde(
        rename = "SCHEDULE_START_DATE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Value>,
    #[serde(
        rename = "SCHEDULE_END_DATE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Value>,
    #[serde(rename = "H_ID", default, skip_serializing_if = "Option::is_none")]
    pub header_id: Option<Value>,
    #[serde(rename = "DESCRIPTION", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

impl TaskRecord {
    pub fn id(&self) -> Option<u64> {
        self.id.as_ref().and_then(coerce_id)
    }

    pub fn lane_id(&self) -> Option<u64> {
        self.lane_id.as_ref().and_then(coerce_id)
    }

    pub fn header_id(&self) -> Option<u64> {
        self.header_id.as_ref().and_then(coerce_id)
    }

    pub fn start_date(&self) -> Option<Date> {
        self.start_date.as_ref().and_then(coerce_day)
    }

    pub fn end_date(&self) -> Option<Date> {
        self.end_date.as_ref().and_then(coerce_day)
    }

    pub fn description(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Raw contractor row from `GET /contractor_api.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContractorRecord {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "NAME", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
}

impl ContractorRecord {
    pub fn id(&self) -> Option<u64> {
        self.id.as_ref().and_then(coerce_id)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str).map(str::trim)
    }
}

/// Raw calendar row from `GET /calender_api.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalendarRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_status: Option<Value>,
}

impl CalendarRecord {
    /// Marker value the calendar API uses for non-working days.
    pub const HOLIDAY: &'static str = "Holiday";

    pub fn day(&self) -> Option<Date> {
        self.day.as_ref().and_then(coerce_day)
    }

    pub fn is_holiday(&self) -> bool {
        self.working_status.as_ref().and_then(Value::as_str) == Some(Self::HOLIDAY)
    }
}

/// Body of `PUT /gantt_api.php`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskUpdate {
    #[serde(rename = "L_ID")]
    pub id: u64,
    #[serde(rename = "C_P_ID")]
    pub lane_id: u64,
    #[serde(rename = "SCHEDULE_START_DATE")]
    pub start_date: Date,
    #[serde(rename = "SCHEDULE_END_DATE")]
    pub end_date: Date,
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
}

impl TryFrom<&TaskInterval> for TaskUpdate {
    type Error = TimelineError;

    fn try_from(task: &TaskInterval) -> Result<Self> {
        let id = task
            .id
            .server_id()
            .ok_or(TimelineError::NotPersisted { id: task.id })?;
        Ok(Self {
            id,
            lane_id: task.lane_id,
            start_date: task.start_date(),
            end_date: task.end_date(),
            description: task.label.clone(),
        })
    }
}

/// Body of `POST /gantt_api.php`; only used for the second half of a split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCreate {
    #[serde(rename = "C_P_ID")]
    pub lane_id: u64,
    #[serde(rename = "SCHEDULE_START_DATE")]
    pub start_date: Date,
    #[serde(rename = "SCHEDULE_END_DATE")]
    pub end_date: Date,
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
    #[serde(rename = "CREATION_BY")]
    pub created_by: String,
    #[serde(rename = "H_ID")]
    pub header_id: u64,
}

impl TaskCreate {
    pub fn new(task: &TaskInterval, header_id: u64, created_by: impl Into<String>) -> Self {
        Self {
            lane_id: task.lane_id,
            start_date: task.start_date(),
            end_date: task.end_date(),
            description: task.label.clone(),
            created_by: created_by.into(),
            header_id,
        }
    }
}

/// Response of the write endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteResponse {
    #[serde(default, deserialize_with = "loose_bool")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WriteResponse {
    /// Converts a `success: false` answer into `TimelineError::Rejected`.
    pub fn into_result(self, operation: &str) -> Result<()> {
        if self.success {
            return Ok(());
        }
        Err(TimelineError::Rejected {
            operation: match self.message {
                Some(message) => format!("{operation} ({message})"),
                None => operation.to_string(),
            },
        })
    }
}

fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_day(value: &Value) -> Option<Date> {
    value.as_str().and_then(parse_day)
}

fn loose_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.trim().to_lowercase().as_str(), "true" | "1"),
        _ => false,
    })
}
