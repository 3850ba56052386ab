use std::sync::Mutex;

use serde_json::json;
use trestle_core::{
    models::{CalendarRecord, ContractorRecord, TaskCreate, TaskRecord, TaskUpdate},
    Result, ScheduleApi, SessionBuilder, ScheduleSession, TimelineError,
};

/// In-memory stand-in for the PHP schedule endpoints.
///
/// Updates are applied to the stored rows and creates append a row with the
/// next free `L_ID`, so a reload sees what a real server would return.
#[derive(Debug, Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub tasks: Vec<TaskRecord>,
    pub contractors: Vec<ContractorRecord>,
    pub calendar: Vec<CalendarRecord>,
    pub updates: Vec<TaskUpdate>,
    pub creates: Vec<TaskCreate>,
    pub task_fetches: usize,
    pub fail_updates: bool,
    pub fail_creates: bool,
    pub fail_calendar: bool,
}

impl MockApi {
    /// Two contractors, three tasks (one on another header), one holiday.
    pub fn with_schedule() -> Self {
        let state = MockState {
            contractors: serde_json::from_value(json!([
                { "ID": "1", "NAME": "Acme Concrete" },
                { "ID": "2", "NAME": "Bolt Electrical" }
            ]))
            .unwrap(),
            tasks: serde_json::from_value(json!([
                {
                    "L_ID": "10", "C_P_ID": "1", "H_ID": "1",
                    "SCHEDULE_START_DATE": "2024-11-06",
                    "SCHEDULE_END_DATE": "2024-11-13",
                    "DESCRIPTION": "Slab"
                },
                {
                    "L_ID": "11", "C_P_ID": "2", "H_ID": "1",
                    "SCHEDULE_START_DATE": "2024-11-04",
                    "SCHEDULE_END_DATE": "2024-11-05",
                    "DESCRIPTION": "Conduit"
                },
                {
                    "L_ID": "12", "C_P_ID": "2", "H_ID": "2",
                    "SCHEDULE_START_DATE": "2024-12-01",
                    "SCHEDULE_END_DATE": "2024-12-02",
                    "DESCRIPTION": "Other site"
                }
            ]))
            .unwrap(),
            calendar: serde_json::from_value(json!([
                { "day": "2024-11-07", "working_status": "Holiday" },
                { "day": "2024-11-08", "working_status": "Working" }
            ]))
            .unwrap(),
            ..MockState::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    fn rejected(operation: &str) -> TimelineError {
        TimelineError::Rejected {
            operation: operation.to_string(),
        }
    }
}

impl ScheduleApi for MockApi {
    async fn fetch_tasks(&self) -> Result<Vec<TaskRecord>> {
        self.with_state(|state| {
            state.task_fetches += 1;
            Ok(state.tasks.clone())
        })
    }

    async fn fetch_contractors(&self) -> Result<Vec<ContractorRecord>> {
        self.with_state(|state| Ok(state.contractors.clone()))
    }

    async fn fetch_calendar(&self) -> Result<Vec<CalendarRecord>> {
        self.with_state(|state| {
            if state.fail_calendar {
                return Err(Self::rejected("calendar fetch"));
            }
            Ok(state.calendar.clone())
        })
    }

    async fn update_task(&self, update: &TaskUpdate) -> Result<()> {
        self.with_state(|state| {
            state.updates.push(update.clone());
            if state.fail_updates {
                return Err(Self::rejected("task update"));
            }
            if let Some(row) = state
                .tasks
                .iter_mut()
                .find(|row| row.id() == Some(update.id))
            {
                row.lane_id = Some(json!(update.lane_id.to_string()));
                row.start_date = Some(json!(update.start_date.to_string()));
                row.end_date = Some(json!(update.end_date.to_string()));
                row.description = Some(json!(update.description));
            }
            Ok(())
        })
    }

    async fn create_task(&self, create: &TaskCreate) -> Result<()> {
        self.with_state(|state| {
            state.creates.push(create.clone());
            if state.fail_creates {
                return Err(Self::rejected("task creation"));
            }
            let next_id = state.tasks.iter().filter_map(TaskRecord::id).max().unwrap_or(0) + 1;
            state.tasks.push(TaskRecord {
                id: Some(json!(next_id)),
                lane_id: Some(json!(create.lane_id)),
                start_date: Some(json!(create.start_date.to_string())),
                end_date: Some(json!(create.end_date.to_string())),
                header_id: Some(json!(create.header_id)),
                description: Some(json!(create.description)),
            });
            Ok(())
        })
    }
}

/// Helper function to create a loaded session over the mock schedule
pub async fn create_test_session(api: MockApi) -> ScheduleSession<MockApi> {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("config.json");
    std::fs::write(&config_path, r#"{ "header_id": 1, "created_by": "tester" }"#)
        .expect("Failed to write settings");

    SessionBuilder::new()
        .with_config_path(Some(&config_path))
        .build_with_api(api)
        .await
        .expect("Failed to load session")
}
