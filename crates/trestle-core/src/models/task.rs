//! Task interval model definition and related functionality.

use std::{fmt, str::FromStr};

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Identity of a task interval.
///
/// Tasks loaded from the server carry their `L_ID`. The second half of a
/// split only exists locally until the next reload hands back the ID the
/// server assigned, so it gets a session-unique pending token instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum TaskId {
    /// Persisted record
    Server(u64),

    /// Local-only record awaiting its server ID
    Pending(u64),
}

impl TaskId {
    /// Server ID of a persisted task.
    pub fn server_id(&self) -> Option<u64> {
        match self {
            TaskId::Server(id) => Some(*id),
            TaskId::Pending(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TaskId::Pending(_))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Server(id) => write!(f, "{id}"),
            TaskId::Pending(token) => write!(f, "pending-{token}"),
        }
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(token) = s.strip_prefix("pending-") {
            return token
                .parse()
                .map(TaskId::Pending)
                .map_err(|_| format!("Invalid task id: {s}"));
        }
        s.parse()
            .map(TaskId::Server)
            .map_err(|_| format!("Invalid task id: {s}"))
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId::Server(id)
    }
}

/// Endpoint of a task targeted by a resize gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Start => "start",
            Edge::End => "end",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(Edge::Start),
            "end" => Ok(Edge::End),
            _ => Err(format!("Invalid edge: {s}")),
        }
    }
}

/// Which edges of a task may be dragged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdges {
    None,
    Start,
    End,
    #[default]
    Both,
}

impl ResizeEdges {
    pub fn allows(&self, edge: Edge) -> bool {
        matches!(
            (self, edge),
            (ResizeEdges::Both, _)
                | (ResizeEdges::Start, Edge::Start)
                | (ResizeEdges::End, Edge::End)
        )
    }
}

/// Editing capabilities of a task bar. Everything is allowed for tasks
/// loaded from the schedule API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capabilities {
    pub movable: bool,
    pub resizable: ResizeEdges,
    pub lane_reassignable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            movable: true,
            resizable: ResizeEdges::Both,
            lane_reassignable: true,
        }
    }
}

/// A schedulable unit of work assigned to one lane.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskInterval {
    /// Server ID or pending token
    pub id: TaskId,

    /// Contractor lane this task belongs to (`C_P_ID`)
    pub lane_id: u64,

    /// First instant covered by the task
    start: DateTime,

    /// Last instant covered by the task; never before `start`
    end: DateTime,

    /// Text shown on the bar
    pub label: String,

    /// Editing capabilities
    pub capabilities: Capabilities,
}

impl TaskInterval {
    /// Creates an editable task.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` if `end` precedes `start`.
    pub fn new(
        id: TaskId,
        lane_id: u64,
        start: DateTime,
        end: DateTime,
        label: impl Into<String>,
    ) -> Result<Self> {
        check_order(start, end)?;
        Ok(Self {
            id,
            lane_id,
            start,
            end,
            label: label.into(),
            capabilities: Capabilities::default(),
        })
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    pub fn start_date(&self) -> Date {
        self.start.date()
    }

    pub fn end_date(&self) -> Date {
        self.end.date()
    }

    /// Replaces both endpoints at once.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` and leaves the task untouched if
    /// `end` precedes `start`.
    pub fn set_span(&mut self, start: DateTime, end: DateTime) -> Result<()> {
        check_order(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

fn check_order(start: DateTime, end: DateTime) -> Result<()> {
    if start > end {
        return Err(TimelineError::invalid_input("end")
            .with_reason(format!("end {end} precedes start {start}")));
    }
    Ok(())
}
