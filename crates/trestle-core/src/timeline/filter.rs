//! Lane filtering and holiday-aware day metrics.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use crate::models::{HolidaySet, ResourceLane, TaskInterval, ViewWindow};

/// Contractor dropdown selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LaneSelection {
    /// Every lane (the "all" sentinel)
    #[default]
    All,

    /// A single contractor lane
    Lane(u64),
}

impl LaneSelection {
    pub fn includes(&self, lane_id: u64) -> bool {
        match self {
            LaneSelection::All => true,
            LaneSelection::Lane(selected) => *selected == lane_id,
        }
    }
}

impl FromStr for LaneSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(LaneSelection::All);
        }
        s.parse()
            .map(LaneSelection::Lane)
            .map_err(|_| format!("Invalid lane selection: {s} (expected 'all' or a lane id)"))
    }
}

impl fmt::Display for LaneSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneSelection::All => f.write_str("all"),
            LaneSelection::Lane(id) => write!(f, "{id}"),
        }
    }
}

/// Lanes and tasks visible under a [`LaneSelection`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineView {
    pub lanes: Vec<ResourceLane>,
    pub tasks: Vec<TaskInterval>,
    pub window: ViewWindow,
}

impl TimelineView {
    /// Tasks drawn in `lane_id`, ordered by start.
    pub fn tasks_in_lane(&self, lane_id: u64) -> Vec<&TaskInterval> {
        let mut tasks: Vec<_> = self.tasks.iter().filter(|t| t.lane_id == lane_id).collect();
        tasks.sort_by_key(|t| (t.start(), t.id));
        tasks
    }
}

/// Restricts lanes and tasks to `selection`. Hidden tasks stay in the
/// timeline; only the returned view omits them.
pub fn filter_by_lane(
    lanes: &[ResourceLane],
    tasks: &[TaskInterval],
    selection: LaneSelection,
) -> (Vec<ResourceLane>, Vec<TaskInterval>) {
    let lanes = lanes
        .iter()
        .filter(|lane| selection.includes(lane.id))
        .cloned()
        .collect();
    let tasks = tasks
        .iter()
        .filter(|task| selection.includes(task.lane_id))
        .cloned()
        .collect();
    (lanes, tasks)
}

/// Total, working and non-working days of an inclusive date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DayBreakdown {
    pub total: u32,
    pub working: u32,
    pub off: u32,
}

/// Counts the days of `[start, end]` and how many of them are holidays.
/// An inverted range counts as empty.
pub fn working_days_between(start: Date, end: Date, holidays: &HolidaySet) -> DayBreakdown {
    if end < start {
        return DayBreakdown::default();
    }
    let total = start
        .series(1.day())
        .take_while(|day| *day <= end)
        .count() as u32;
    let off = holidays.within(start, end).count() as u32;
    DayBreakdown {
        total,
        working: total - off,
        off,
    }
}
