//! Core library for the Trestle schedule timeline.
//!
//! Trestle edits a contractor schedule drawn as a timeline: one lane per
//! contractor, one bar per task. Bars can be dragged (move), stretched
//! (resize) and cut in two (split); every change is written back to the
//! schedule's REST API.
//!
//! # Layers
//!
//! - [`models`]: Lanes, task intervals, holidays, window and wire records
//! - [`timeline`]: In-memory timeline with the move/resize/split engine,
//!   auto-fit window, lane colors and lane filtering
//! - [`sync`]: De-duplicating writer for task updates
//! - [`api`]: The [`ScheduleApi`] seam and its HTTP implementation
//! - [`session`]: Loads a schedule and applies edits end to end
//! - [`display`]: Markdown formatting of everything above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trestle_core::{params::{ShowSchedule, SplitTask}, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_api_base_url(Some("https://office.example/api"))
//!     .with_header_id(Some(1))
//!     .build()
//!     .await?;
//!
//! let outcome = session
//!     .split_task(&SplitTask {
//!         id: 10,
//!         at: "2024-11-09".to_string(),
//!     })
//!     .await;
//! print!("{outcome}");
//!
//! println!("{}", session.view(&ShowSchedule::default())?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod ingest;
pub mod models;
pub mod params;
pub mod session;
pub mod sync;
pub mod timeline;

// Re-export commonly used types
pub use api::{HttpScheduleApi, ScheduleApi};
pub use config::Settings;
pub use display::{DayLabel, Notice, NoticeLevel, Outcome};
pub use error::{Result, TimelineError};
pub use models::{Edge, HolidaySet, ResourceLane, TaskId, TaskInterval, ViewWindow};
pub use params::{DayRange, MoveTask, ResizeTask, ShowSchedule, SplitTask, TaskRef};
pub use session::{ScheduleSession, SessionBuilder, TaskSummary};
pub use sync::{SyncCoordinator, SyncStatus};
pub use timeline::{
    working_days_between, ColorRegistry, DayBreakdown, LaneSelection, SyncOp, Timeline,
    TimelineView,
};
