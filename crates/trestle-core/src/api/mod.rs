//! Schedule API seam.
//!
//! [`ScheduleApi`] is the boundary to the REST backend. The session is
//! generic over it so tests can substitute an in-memory double; production
//! code uses [`HttpScheduleApi`].

use std::future::Future;

use crate::{
    error::Result,
    models::{CalendarRecord, ContractorRecord, TaskCreate, TaskRecord, TaskUpdate},
};

pub mod http;

pub use http::HttpScheduleApi;

/// Path of the task endpoint (GET / PUT / POST).
pub const GANTT_ENDPOINT: &str = "gantt_api.php";
/// Path of the contractor list endpoint.
pub const CONTRACTOR_ENDPOINT: &str = "contractor_api.php";
/// Path of the working-calendar endpoint.
pub const CALENDAR_ENDPOINT: &str = "calender_api.php";

/// Operations the timeline needs from the backend.
pub trait ScheduleApi: Send + Sync {
    /// All task rows, across every schedule header.
    fn fetch_tasks(&self) -> impl Future<Output = Result<Vec<TaskRecord>>> + Send;

    /// Contractor list used to build the lanes.
    fn fetch_contractors(&self) -> impl Future<Output = Result<Vec<ContractorRecord>>> + Send;

    /// Working calendar, including holiday markers.
    fn fetch_calendar(&self) -> impl Future<Output = Result<Vec<CalendarRecord>>> + Send;

    /// Overwrites one task.
    fn update_task(&self, update: &TaskUpdate) -> impl Future<Output = Result<()>> + Send;

    /// Creates one task.
    fn create_task(&self, create: &TaskCreate) -> impl Future<Output = Result<()>> + Send;
}
