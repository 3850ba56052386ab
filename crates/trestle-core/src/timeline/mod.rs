//! In-memory schedule timeline and its editing engine.
//!
//! The [`Timeline`] owns the lanes, the task intervals and the visible
//! window of one editing session. Gestures (move, resize, split) are plain
//! method calls that update the local state optimistically and hand back the
//! server operations ([`SyncOp`]) needed to persist the change; dispatching
//! them is the caller's job (see [`crate::session`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Gesture      │    │    Timeline     │    │ SyncCoordinator │
//! │ (move / resize  │───▶│ (new state +    │───▶│ (dedupe, PUT /  │
//! │  / split)       │    │  Vec<SyncOp>)   │    │  POST, reload)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`colors`]: Stable lane-to-color assignment
//! - [`window`]: Auto-fit window calculation
//! - [`engine`]: Move, resize and split state transitions
//! - [`filter`]: Lane filtering and working-day metrics
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use trestle_core::{
//!     models::{end_of_day, start_of_day, ResourceLane, TaskId, TaskInterval, ViewWindow},
//!     timeline::{SyncOp, Timeline},
//! };
//!
//! let mut timeline = Timeline::new(ViewWindow::around(date(2024, 11, 1).at(12, 0, 0, 0)));
//! timeline.set_lanes(vec![
//!     ResourceLane::new(1, "Acme Concrete", "#4e79a7"),
//!     ResourceLane::new(2, "Bolt Electrical", "#f28e2b"),
//! ]);
//! timeline.replace_tasks(vec![TaskInterval::new(
//!     TaskId::Server(10),
//!     1,
//!     start_of_day(date(2024, 11, 6)),
//!     end_of_day(date(2024, 11, 13)),
//!     "Slab",
//! )
//! .unwrap()]);
//!
//! // Drag the bar two days later and onto lane 2.
//! let ops = timeline
//!     .move_task(TaskId::Server(10), start_of_day(date(2024, 11, 8)), 2)
//!     .unwrap();
//! assert!(matches!(ops.as_slice(), [SyncOp::Update(task)] if task.lane_id == 2));
//! ```

use std::collections::HashSet;

use log::debug;

use crate::{
    error::{Result, TimelineError},
    models::{HolidaySet, ResourceLane, TaskId, TaskInterval, ViewWindow},
};

pub mod colors;
pub mod engine;
pub mod filter;
pub mod window;


pub use colors::{ColorRegistry, DEFAULT_PALETTE};
pub use engine::SyncOp;
pub use filter::{filter_by_lane, working_days_between, DayBreakdown, LaneSelection, TimelineView};
pub use window::{compute_window, TRAILING_BUFFER_DAYS};

/// Lanes, tasks and visible window of one editing session.
#[derive(Debug, Clone)]
pub struct Timeline {
    lanes: Vec<ResourceLane>,
    tasks: Vec<TaskInterval>,
    window: ViewWindow,
    next_pending: u64,
}

impl Timeline {
    /// Creates an empty timeline showing `window`.
    pub fn new(window: ViewWindow) -> Self {
        Self {
            lanes: Vec::new(),
            tasks: Vec::new(),
            window,
            next_pending: 1,
        }
    }

    pub fn lanes(&self) -> &[ResourceLane] {
        &self.lanes
    }

    pub fn tasks(&self) -> &[TaskInterval] {
        &self.tasks
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    /// Pans or zooms the time axis.
    pub fn set_window(&mut self, window: ViewWindow) {
        self.window = window;
    }

    pub fn lane(&self, id: u64) -> Option<&ResourceLane> {
        self.lanes.iter().find(|lane| lane.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&TaskInterval> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Installs the contractor lanes. Lanes are fetched once per session.
    pub fn set_lanes(&mut self, lanes: Vec<ResourceLane>) {
        self.lanes = lanes;
    }

    /// Replaces the whole task set with a fresh server snapshot and refits
    /// the window to it.
    ///
    /// Tasks pointing at an unknown lane and repeated IDs are dropped.
    /// Returns the number of tasks kept.
    pub fn replace_tasks(&mut self, tasks: Vec<TaskInterval>) -> usize {
        let known_lanes: HashSet<u64> = self.lanes.iter().map(|lane| lane.id).collect();
        let mut seen = HashSet::new();
        self.tasks = tasks
            .into_iter()
            .filter(|task| {
                if !known_lanes.contains(&task.lane_id) {
                    debug!("Dropping task {}: unknown lane {}", task.id, task.lane_id);
                    return false;
                }
                if !seen.insert(task.id) {
                    debug!("Dropping task {}: duplicate id", task.id);
                    return false;
                }
                true
            })
            .collect();

        if let Some(window) = compute_window(&self.tasks) {
            self.window = window;
        }
        self.tasks.len()
    }

    /// Lanes visible under `selection`, with their tasks that overlap the
    /// current window.
    pub fn view(&self, selection: LaneSelection) -> TimelineView {
        let (lanes, mut tasks) = filter_by_lane(&self.lanes, &self.tasks, selection);
        tasks.retain(|task| self.window.overlaps(task.start(), task.end()));
        TimelineView {
            lanes,
            tasks,
            window: self.window,
        }
    }

    /// Total / working / off days covered by a task.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::TaskNotFound` for an unknown task.
    pub fn summary(&self, id: TaskId, holidays: &HolidaySet) -> Result<DayBreakdown> {
        let task = self.task(id).ok_or(TimelineError::TaskNotFound { id })?;
        Ok(working_days_between(
            task.start_date(),
            task.end_date(),
            holidays,
        ))
    }

    pub(crate) fn task_index(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TimelineError::TaskNotFound { id })
    }

    pub(crate) fn allocate_pending_id(&mut self) -> TaskId {
        let id = TaskId::Pending(self.next_pending);
        self.next_pending += 1;
        id
    }
}
