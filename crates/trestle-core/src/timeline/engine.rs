//! Move, resize and split transitions of the timeline.
//!
//! Every transition either succeeds, in which case the local state has
//! already been updated and the returned [`SyncOp`]s describe what the server
//! needs to hear, or fails with a validation error and leaves the timeline
//! untouched.

use jiff::civil::DateTime;
use log::{debug, warn};

use super::Timeline;
use crate::{
    error::{Result, TimelineError},
    models::{end_of_day, start_of_day, Edge, TaskId, TaskInterval},
};

/// Server write required to persist a local change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOp {
    /// `PUT` of an existing record
    Update(TaskInterval),

    /// `POST` of a new record (second half of a split)
    Create(TaskInterval),
}

impl SyncOp {
    pub fn task(&self) -> &TaskInterval {
        match self {
            SyncOp::Update(task) | SyncOp::Create(task) => task,
        }
    }
}

impl Timeline {
    /// Drags a task so that it starts at `new_start` on lane `new_lane`,
    /// keeping its duration.
    ///
    /// # Errors
    ///
    /// - `TaskNotFound` / `NotPersisted` for an unknown or unsaved task
    /// - `NotEditable` if the task may not move or change lanes
    /// - `LaneNotFound` if `new_lane` is not on the timeline
    pub fn move_task(
        &mut self,
        id: TaskId,
        new_start: DateTime,
        new_lane: u64,
    ) -> Result<Vec<SyncOp>> {
        let index = self.editable_index(id)?;
        let task = &self.tasks[index];

        if !task.capabilities.movable {
            return Err(TimelineError::NotEditable { id, action: "moved" });
        }
        if new_lane != task.lane_id {
            if !task.capabilities.lane_reassignable {
                return Err(TimelineError::NotEditable {
                    id,
                    action: "reassigned to another lane",
                });
            }
            if self.lane(new_lane).is_none() {
                return Err(TimelineError::LaneNotFound { id: new_lane });
            }
        }

        let delta = new_start.duration_since(task.start());
        let new_end = task.end().checked_add(delta)?;

        let task = &mut self.tasks[index];
        task.set_span(new_start, new_end)?;
        task.lane_id = new_lane;
        debug!(
            "Moved task {} to lane {} ({} .. {})",
            id,
            new_lane,
            task.start(),
            task.end()
        );
        Ok(vec![SyncOp::Update(task.clone())])
    }

    /// Drags one edge of a task to `new_time`, leaving the other edge fixed.
    ///
    /// # Errors
    ///
    /// - `TaskNotFound` / `NotPersisted` for an unknown or unsaved task
    /// - `NotEditable` if that edge is not resizable
    /// - `InvertedResize` if the task would end before it starts
    pub fn resize_task(&mut self, id: TaskId, new_time: DateTime, edge: Edge) -> Result<Vec<SyncOp>> {
        let index = self.editable_index(id)?;
        let task = &mut self.tasks[index];

        if !task.capabilities.resizable.allows(edge) {
            return Err(TimelineError::NotEditable {
                id,
                action: match edge {
                    Edge::Start => "resized at its start",
                    Edge::End => "resized at its end",
                },
            });
        }

        let (start, end) = match edge {
            Edge::Start => (new_time, task.end()),
            Edge::End => (task.start(), new_time),
        };
        if start > end {
            return Err(TimelineError::InvertedResize {
                id,
                edge,
                requested: new_time,
            });
        }

        task.set_span(start, end)?;
        debug!("Resized {} of task {} to {}", edge, id, new_time);
        Ok(vec![SyncOp::Update(task.clone())])
    }

    /// Splits a task into two contiguous pieces at the day containing `at`.
    ///
    /// The first piece keeps the task's ID and ends at the end of that day;
    /// the second gets a pending ID and starts at the beginning of the next
    /// day, running to the original end.
    ///
    /// # Errors
    ///
    /// - `TaskNotFound` / `NotPersisted` for an unknown or unsaved task
    /// - `InvalidSplit` unless `start < at < end` and `at` falls before the
    ///   task's last day
    pub fn split_task(&mut self, id: TaskId, at: DateTime) -> Result<Vec<SyncOp>> {
        let index = self.editable_index(id)?;
        let original = &self.tasks[index];

        if at <= original.start() || at >= original.end() || at.date() >= original.end_date() {
            warn!(
                "Rejected split of task {} at {}: outside {} .. {}",
                id,
                at,
                original.start(),
                original.end()
            );
            return Err(TimelineError::InvalidSplit { id, at });
        }

        let first_end = end_of_day(at.date());
        let second_start = start_of_day(at.date().tomorrow()?);

        let mut first = original.clone();
        first.set_span(original.start(), first_end)?;

        let mut second = original.clone();
        second.set_span(second_start, original.end())?;
        second.id = self.allocate_pending_id();

        self.tasks[index] = first.clone();
        self.tasks.insert(index + 1, second.clone());
        debug!("Split task {} into {} and {}", id, first.id, second.id);
        Ok(vec![SyncOp::Update(first), SyncOp::Create(second)])
    }

    fn editable_index(&self, id: TaskId) -> Result<usize> {
        if id.is_pending() && self.task(id).is_some() {
            return Err(TimelineError::NotPersisted { id });
        }
        self.task_index(id)
    }
}
