//! Editing session against the schedule API.
//!
//! A [`ScheduleSession`] ties the in-memory [`Timeline`] to a
//! [`ScheduleApi`]: it loads lanes, holidays and tasks, applies gestures
//! locally, then pushes the resulting [`SyncOp`]s through the
//! [`SyncCoordinator`]. Local state is optimistic. A failed write is
//! reported but not rolled back; the next reload restores server truth.
//!
//! # Examples
//!
//! ```rust,no_run
//! use trestle_core::{params::MoveTask, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_api_base_url(Some("https://office.example/api"))
//!     .build()
//!     .await?;
//!
//! let outcome = session
//!     .move_task(&MoveTask {
//!         id: 10,
//!         start: "2024-11-08".to_string(),
//!         lane: Some(2),
//!     })
//!     .await;
//! print!("{outcome}");
//! # Ok(())
//! # }
//! ```

use log::{info, warn};
use serde::Serialize;

use crate::{
    api::ScheduleApi,
    config::Settings,
    display::{Notice, Outcome},
    error::{Result, TimelineError},
    ingest::{parse_holidays, parse_lanes, parse_tasks},
    models::{HolidaySet, ResourceLane, TaskInterval, ViewWindow},
    params::{MoveTask, ResizeTask, ShowSchedule, SplitTask, TaskRef},
    sync::{SyncCoordinator, SyncStatus},
    timeline::{ColorRegistry, DayBreakdown, SyncOp, Timeline, TimelineView},
};

pub mod builder;

pub use builder::SessionBuilder;

/// Day metrics of one task, as shown in its tooltip.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskSummary {
    pub task: TaskInterval,
    pub lane: ResourceLane,
    pub days: DayBreakdown,
}

/// One user's editing session of one schedule header.
#[derive(Debug)]
pub struct ScheduleSession<A: ScheduleApi> {
    api: A,
    settings: Settings,
    timeline: Timeline,
    colors: ColorRegistry,
    holidays: HolidaySet,
    sync: SyncCoordinator,
}

impl<A: ScheduleApi> ScheduleSession<A> {
    /// Creates an empty session; call [`load`](Self::load) before editing.
    pub fn new(api: A, settings: Settings) -> Self {
        Self {
            colors: ColorRegistry::new(settings.palette.clone()),
            sync: SyncCoordinator::new(settings.sync_cooldown()),
            timeline: Timeline::new(ViewWindow::around_now()),
            holidays: HolidaySet::new(),
            api,
            settings,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Fetches lanes, holidays and tasks.
    ///
    /// Lanes are fetched once; later calls only refresh holidays and tasks.
    /// A calendar failure is logged and leaves the holiday set empty, since
    /// only the day counts depend on it.
    ///
    /// # Errors
    ///
    /// Returns the transport error if contractors or tasks cannot be
    /// fetched.
    pub async fn load(&mut self) -> Result<()> {
        if self.timeline.lanes().is_empty() {
            let contractors = self.api.fetch_contractors().await?;
            let lanes = parse_lanes(&contractors, &mut self.colors);
            info!("Loaded {} contractor lanes", lanes.len());
            self.timeline.set_lanes(lanes);
        }

        match self.api.fetch_calendar().await {
            Ok(calendar) => self.holidays = parse_holidays(&calendar),
            Err(e) => warn!("Could not load the working calendar: {e}"),
        }

        self.reload_tasks().await?;
        Ok(())
    }

    /// Replaces local tasks with the server's, refitting the window.
    /// Returns the number of tasks on the timeline.
    ///
    /// # Errors
    ///
    /// Returns the transport error; local state is kept in that case.
    pub async fn reload_tasks(&mut self) -> Result<usize> {
        let records = self.api.fetch_tasks().await?;
        let tasks = parse_tasks(&records, self.settings.header_id);
        let kept = self.timeline.replace_tasks(tasks);
        info!(
            "Loaded {kept} tasks for schedule {}",
            self.settings.header_id
        );
        Ok(kept)
    }

    /// Lanes and tasks visible under the requested lane filter.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` for a malformed lane filter.
    pub fn view(&self, params: &ShowSchedule) -> Result<TimelineView> {
        Ok(self.timeline.view(params.selection()?))
    }

    /// Day metrics of one task.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::TaskNotFound` for an unknown task.
    pub fn summary(&self, params: &TaskRef) -> Result<TaskSummary> {
        let id = params.id.into();
        let days = self.timeline.summary(id, &self.holidays)?;
        let task = self
            .timeline
            .task(id)
            .cloned()
            .ok_or(TimelineError::TaskNotFound { id })?;
        let lane = self
            .timeline
            .lane(task.lane_id)
            .cloned()
            .ok_or(TimelineError::LaneNotFound { id: task.lane_id })?;
        Ok(TaskSummary { task, lane, days })
    }

    /// Moves a task and persists the new position.
    pub async fn move_task(&mut self, params: &MoveTask) -> Outcome {
        let id = params.task_id();
        let result = params.new_start().and_then(|start| {
            let lane = match params.lane {
                Some(lane) => lane,
                None => self
                    .timeline
                    .task(id)
                    .map(|task| task.lane_id)
                    .ok_or(TimelineError::TaskNotFound { id })?,
            };
            self.timeline.move_task(id, start, lane)
        });
        self.apply(result).await
    }

    /// Resizes one edge of a task and persists it.
    pub async fn resize_task(&mut self, params: &ResizeTask) -> Outcome {
        let result = params
            .parse()
            .and_then(|(edge, to)| self.timeline.resize_task(params.task_id(), to, edge));
        self.apply(result).await
    }

    /// Splits a task, updating the first half and creating the second.
    pub async fn split_task(&mut self, params: &SplitTask) -> Outcome {
        let result = params
            .split_at()
            .and_then(|at| self.timeline.split_task(params.task_id(), at));
        self.apply(result).await
    }

    async fn apply(&mut self, result: Result<Vec<SyncOp>>) -> Outcome {
        match result {
            Ok(ops) => self.dispatch(ops).await,
            Err(e) => {
                warn!("Edit rejected: {e}");
                Outcome::rejected(&e)
            }
        }
    }

    /// Sends every op, in order. A failure is reported and the remaining ops
    /// are still attempted. The schedule is reloaded after a create only if
    /// the whole batch went through; otherwise the local state stands.
    async fn dispatch(&mut self, ops: Vec<SyncOp>) -> Outcome {
        let mut outcome = Outcome::default();
        let is_split = ops.iter().any(|op| matches!(op, SyncOp::Create(_)));
        let mut created = false;
        let mut failed = false;

        for op in ops {
            match op {
                SyncOp::Update(task) => {
                    let notice = match self.sync.sync_update(&self.api, &task).await {
                        Ok(SyncStatus::Sent) => Notice::success(format!("Saved task {}", task.id)),
                        Ok(SyncStatus::Suppressed) => {
                            Notice::info(format!("Task {} is already saved", task.id))
                        }
                        Err(e) => {
                            failed = true;
                            Notice::error(format!(
                                "Could not save task {}: {e}. The change is kept locally until the next reload",
                                task.id
                            ))
                        }
                    };
                    outcome.push(notice);
                    outcome.tasks.push(task);
                }
                SyncOp::Create(task) => {
                    let result = self
                        .sync
                        .create(
                            &self.api,
                            &task,
                            self.settings.header_id,
                            &self.settings.created_by,
                        )
                        .await;
                    match result {
                        Ok(()) => {
                            created = true;
                            outcome.push(Notice::success(format!(
                                "Created task on lane {}",
                                task.lane_id
                            )));
                        }
                        Err(e) => {
                            failed = true;
                            outcome.push(Notice::error(format!(
                                "Could not create the new task: {e}"
                            )));
                        }
                    }
                    outcome.tasks.push(task);
                }
            }
        }

        if failed {
            if is_split {
                warn!("Split only partly saved; keeping the local split");
                outcome.push(Notice::warning(
                    "Split is only partly saved. The local split is kept until the next reload",
                ));
            }
        } else if created {
            if let Err(e) = self.reload_tasks().await {
                outcome.push(Notice::warning(format!(
                    "Saved, but reloading the schedule failed: {e}"
                )));
            } else {
                self.refresh_outcome_tasks(&mut outcome);
            }
        }
        outcome
    }

    /// After a reload the pending half has its server ID; report the tasks
    /// as they are now stored.
    fn refresh_outcome_tasks(&self, outcome: &mut Outcome) {
        outcome.tasks = outcome
            .tasks
            .iter()
            .map(|reported| {
                self.timeline
                    .tasks()
                    .iter()
                    .find(|task| {
                        task.lane_id == reported.lane_id
                            && task.start_date() == reported.start_date()
                            && task.end_date() == reported.end_date()
                    })
                    .cloned()
                    .unwrap_or_else(|| reported.clone())
            })
            .collect();
    }
}

