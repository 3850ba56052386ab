//! Data models for lanes, task intervals, holidays and the view window.
//!
//! This module contains the core domain models of the schedule timeline.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! # Time Model
//!
//! Tasks occupy whole days. Instants are civil date-times
//! ([`jiff::civil::DateTime`]) with millisecond resolution; the server
//! exchanges plain `YYYY-MM-DD` dates. On ingestion the end of a task is
//! normalized to the last millisecond of its nominal end date (see
//! [`end_of_day`]), and on the wire only the date part is sent back.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use trestle_core::models::{end_of_day, start_of_day, TaskId, TaskInterval};
//!
//! let task = TaskInterval::new(
//!     TaskId::Server(7),
//!     3,
//!     start_of_day(date(2024, 11, 6)),
//!     end_of_day(date(2024, 11, 13)),
//!     "Foundation pour",
//! )
//! .expect("start precedes end");
//! assert_eq!(task.start_date(), date(2024, 11, 6));
//! assert_eq!(task.end_date(), date(2024, 11, 13));
//! ```

pub mod day;
pub mod holidays;
pub mod lane;
pub mod task;
pub mod window;
pub mod wire;


// Re-export all public types at the models level
pub use day::{end_of_day, parse_day, start_of_day};
pub use holidays::HolidaySet;
pub use lane::ResourceLane;
pub use task::{Capabilities, Edge, ResizeEdges, TaskId, TaskInterval};
pub use window::ViewWindow;
pub use wire::{
    CalendarRecord, ContractorRecord, TaskCreate, TaskRecord, TaskUpdate, WriteResponse,
};
