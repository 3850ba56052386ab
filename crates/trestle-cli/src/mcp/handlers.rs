//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use trestle_core::{
    params as core, working_days_between, HttpScheduleApi, Outcome, ScheduleSession,
};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any core
/// parameter type without duplicating the structs.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type TaskRef = McpParams<core::TaskRef>;
pub type ShowSchedule = McpParams<core::ShowSchedule>;
pub type MoveTask = McpParams<core::MoveTask>;
pub type ResizeTask = McpParams<core::ResizeTask>;
pub type SplitTask = McpParams<core::SplitTask>;
pub type DayRange = McpParams<core::DayRange>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<ScheduleSession<HttpScheduleApi>>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<ScheduleSession<HttpScheduleApi>>>) -> Self {
        Self { session }
    }

    pub async fn show_schedule(&self, Parameters(params): Parameters<ShowSchedule>) -> McpResult {
        debug!("show_schedule: {:?}", params);

        let view = self
            .session
            .lock()
            .await
            .view(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show schedule", &e))?;
        Ok(CallToolResult::success(vec![Content::text(view.to_string())]))
    }

    pub async fn reload_schedule(&self) -> McpResult {
        let mut session = self.session.lock().await;
        let count = session
            .reload_tasks()
            .await
            .map_err(|e| to_mcp_error("Failed to reload schedule", &e))?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Reloaded {count} tasks."
        ))]))
    }

    pub async fn move_task(&self, Parameters(params): Parameters<MoveTask>) -> McpResult {
        debug!("move_task: {:?}", params);
        let outcome = self.session.lock().await.move_task(params.as_ref()).await;
        Ok(outcome_result(&outcome))
    }

    pub async fn resize_task(&self, Parameters(params): Parameters<ResizeTask>) -> McpResult {
        debug!("resize_task: {:?}", params);
        let outcome = self.session.lock().await.resize_task(params.as_ref()).await;
        Ok(outcome_result(&outcome))
    }

    pub async fn split_task(&self, Parameters(params): Parameters<SplitTask>) -> McpResult {
        debug!("split_task: {:?}", params);
        let outcome = self.session.lock().await.split_task(params.as_ref()).await;
        Ok(outcome_result(&outcome))
    }

    pub async fn task_summary(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("task_summary: {:?}", params);

        let summary = self
            .session
            .lock()
            .await
            .summary(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to summarize task", &e))?;
        Ok(CallToolResult::success(vec![Content::text(summary.to_string())]))
    }

    pub async fn working_days(&self, Parameters(params): Parameters<DayRange>) -> McpResult {
        debug!("working_days: {:?}", params);

        let (start, end, mut holidays) = params
            .as_ref()
            .parse()
            .map_err(|e| to_mcp_error("Invalid date range", &e))?;
        for day in self.session.lock().await.holidays().within(start, end) {
            holidays.insert(day);
        }
        let days = working_days_between(start, end, &holidays);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{start} .. {end}: {days}"
        ))]))
    }
}

/// Edits always produce a tool result; warnings and errors are flagged with
/// `is_error` so the client sees the gesture did not go through.
fn outcome_result(outcome: &Outcome) -> CallToolResult {
    let content = vec![Content::text(outcome.to_string())];
    if outcome.is_success() {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}
