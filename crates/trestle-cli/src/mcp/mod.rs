//! MCP server implementation for Trestle
//!
//! Exposes the schedule session as Model Context Protocol tools so an AI
//! assistant can inspect and edit the timeline.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use trestle_core::{HttpScheduleApi, ScheduleSession};

pub mod errors;
pub mod handlers;

pub use handlers::{
    DayRange, McpHandlers, McpResult, MoveTask, ResizeTask, ShowSchedule, SplitTask, TaskRef,
};

/// MCP server for Trestle
#[derive(Clone)]
pub struct TrestleMcpServer {
    session: Arc<Mutex<ScheduleSession<HttpScheduleApi>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TrestleMcpServer {
    /// Create a new Trestle MCP server over a loaded session
    pub fn new(session: ScheduleSession<HttpScheduleApi>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "show_schedule",
        description = "Show the schedule timeline: every contractor lane with its tasks (ID, label, start and end date) and the visible date window. Pass lane=\"all\" (default) or a contractor lane ID to show a single contractor."
    )]
    async fn show_schedule(&self, params: Parameters<ShowSchedule>) -> McpResult {
        self.handlers().show_schedule(params).await
    }

    #[tool(
        name = "reload_schedule",
        description = "Fetch the tasks from the schedule server again, discarding local state. Use after an edit reported an error, or to pick up changes made by other users."
    )]
    async fn reload_schedule(&self) -> McpResult {
        self.handlers().reload_schedule().await
    }

    #[tool(
        name = "move_task",
        description = "Move a task to a new start date, keeping its duration. start is YYYY-MM-DD (start of day) or YYYY-MM-DDTHH:MM. Optionally pass lane to reassign the task to another contractor. The change is saved to the server immediately."
    )]
    async fn move_task(&self, params: Parameters<MoveTask>) -> McpResult {
        self.handlers().move_task(params).await
    }

    #[tool(
        name = "resize_task",
        description = "Move one edge of a task. edge is \"start\" or \"end\"; to is the new date (YYYY-MM-DD). The other edge stays put. Rejected if the task would end before it starts."
    )]
    async fn resize_task(&self, params: Parameters<ResizeTask>) -> McpResult {
        self.handlers().resize_task(params).await
    }

    #[tool(
        name = "split_task",
        description = "Split a task in two. The first piece keeps the task ID and ends on day `at` (YYYY-MM-DD); the second piece is created as a new task starting the next day and ending at the original end. `at` must be a day of the task other than its last day."
    )]
    async fn split_task(&self, params: Parameters<SplitTask>) -> McpResult {
        self.handlers().split_task(params).await
    }

    #[tool(
        name = "task_summary",
        description = "Show one task with its contractor, dates, and total / working / non-working day counts based on the holiday calendar."
    )]
    async fn task_summary(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().task_summary(params).await
    }

    #[tool(
        name = "working_days",
        description = "Count total, working and non-working days between two dates (inclusive, YYYY-MM-DD). Holidays from the calendar are applied; extra holidays can be passed in `holidays`."
    )]
    async fn working_days(&self, params: Parameters<DayRange>) -> McpResult {
        self.handlers().working_days(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrestleMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "trestle".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Trestle edits a contractor schedule drawn as a timeline: one lane per contractor, one bar per task.

## Core Concepts
- **Lanes**: Contractors. Each task belongs to exactly one lane.
- **Tasks**: Whole-day intervals with an ID, a label, a start date and an end date (both inclusive).
- **Holidays**: Non-working days from the calendar; they count toward a task's length but not its working days.

## Workflow
1. Use `show_schedule` to see lanes, task IDs and dates
2. Edit with `move_task`, `resize_task` or `split_task`; every edit is saved to the server immediately
3. Use `task_summary` or `working_days` for day counts
4. If an edit reports an error, call `reload_schedule` to get back in sync with the server

## Notes
- Repeating an identical edit within the sync cooldown (one second by default) is not sent twice
- A task created by `split_task` gets its ID from the server; it appears after the automatic reload"#.to_string()),
            ..ServerInfo::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TrestleMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Trestle MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
