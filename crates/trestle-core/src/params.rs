//! Parameter structures for timeline operations.
//!
//! These are shared by every interface (CLI, MCP). Dates and enums travel as
//! strings so that both clap and JSON callers can pass them verbatim; the
//! `parse` methods turn them into validated domain values.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (this module)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Date arguments accept `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`.

use jiff::civil::{Date, DateTime};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TimelineError},
    models::{end_of_day, parse_day, start_of_day, Edge, HolidaySet, TaskId},
    timeline::LaneSelection,
};

/// Parameters for operations requiring just a task ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRef {
    /// Server ID of the task
    pub id: u64,
}

/// Parameters for rendering the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowSchedule {
    /// Contractor lane to show: "all" (default) or a lane ID
    #[serde(default)]
    pub lane: Option<String>,
}

impl ShowSchedule {
    /// Parsed lane selection.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` for anything but "all" or a
    /// numeric lane ID.
    pub fn selection(&self) -> Result<LaneSelection> {
        match &self.lane {
            None => Ok(LaneSelection::All),
            Some(raw) => raw
                .parse()
                .map_err(|reason: String| TimelineError::invalid_input("lane").with_reason(reason)),
        }
    }
}

/// Parameters for dragging a task to a new start and optionally a new lane.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveTask {
    /// Server ID of the task
    pub id: u64,
    /// New start; a bare date means the start of that day
    pub start: String,
    /// Target contractor lane; defaults to the current lane
    #[serde(default)]
    pub lane: Option<u64>,
}

impl MoveTask {
    pub fn task_id(&self) -> TaskId {
        TaskId::Server(self.id)
    }

    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` if `start` is not a date.
    pub fn new_start(&self) -> Result<DateTime> {
        parse_instant("start", &self.start, start_of_day)
    }
}

/// Parameters for dragging one edge of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResizeTask {
    /// Server ID of the task
    pub id: u64,
    /// Edge to move: "start" or "end"
    pub edge: String,
    /// New position of the edge; a bare date snaps to the start of the day
    /// for the start edge and to the end of the day for the end edge
    pub to: String,
}

impl ResizeTask {
    pub fn task_id(&self) -> TaskId {
        TaskId::Server(self.id)
    }

    /// Parsed edge and target instant.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` for an unknown edge or a bad
    /// date.
    pub fn parse(&self) -> Result<(Edge, DateTime)> {
        let edge: Edge = self
            .edge
            .parse()
            .map_err(|reason: String| TimelineError::invalid_input("edge").with_reason(reason))?;
        let to = match edge {
            Edge::Start => parse_instant("to", &self.to, start_of_day)?,
            Edge::End => parse_instant("to", &self.to, end_of_day)?,
        };
        Ok((edge, to))
    }
}

/// Parameters for splitting a task in two.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SplitTask {
    /// Server ID of the task
    pub id: u64,
    /// Day to split on; the first piece ends with this day and the second
    /// starts the day after
    pub at: String,
}

impl SplitTask {
    pub fn task_id(&self) -> TaskId {
        TaskId::Server(self.id)
    }

    /// Split instant. A bare date means noon of that day, which lies inside
    /// the task whenever the day is covered and is not its first instant.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` if `at` is not a date.
    pub fn split_at(&self) -> Result<DateTime> {
        parse_instant("at", &self.at, |day| day.at(12, 0, 0, 0))
    }
}

/// Parameters for counting working days offline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayRange {
    /// First day, inclusive
    pub start: String,
    /// Last day, inclusive
    pub end: String,
    /// Extra non-working days
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl DayRange {
    /// Parsed bounds and holiday set.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` for any unparseable day.
    pub fn parse(&self) -> Result<(Date, Date, HolidaySet)> {
        let start = parse_date("start", &self.start)?;
        let end = parse_date("end", &self.end)?;
        let holidays = self
            .holidays
            .iter()
            .map(|raw| parse_date("holidays", raw))
            .collect::<Result<HolidaySet>>()?;
        Ok((start, end, holidays))
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    parse_day(raw).ok_or_else(|| {
        TimelineError::invalid_input(field).with_reason(format!("'{raw}' is not a YYYY-MM-DD date"))
    })
}

/// Parses a full date-time, or a bare date snapped with `snap`.
fn parse_instant(field: &str, raw: &str, snap: impl Fn(Date) -> DateTime) -> Result<DateTime> {
    let raw = raw.trim();
    if raw.len() > 10 {
        if let Ok(instant) = raw.parse::<DateTime>() {
            return Ok(instant);
        }
    }
    parse_date(field, raw).map(snap)
}
