//! Command-line argument wrappers and command handlers
//!
//! Each subcommand has a clap-derived argument struct that converts into the
//! matching core parameter type from [`trestle_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ScheduleSession
//! ```
//!
//! [`Cli`] owns a loaded session and renders every result as markdown.

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use trestle_core::{
    params::{DayRange, MoveTask, ResizeTask, ShowSchedule, SplitTask, TaskRef},
    working_days_between, Outcome, ScheduleApi, ScheduleSession,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Show the schedule
///
/// Lists every contractor lane with its task bars, limited to one
/// contractor when --lane is given.
#[derive(Args)]
pub struct ShowScheduleArgs {
    /// Contractor lane to show ("all" or a lane ID)
    #[arg(short, long, help = "Contractor lane to show: 'all' (default) or a lane ID")]
    pub lane: Option<String>,
}

impl From<ShowScheduleArgs> for ShowSchedule {
    fn from(val: ShowScheduleArgs) -> Self {
        ShowSchedule { lane: val.lane }
    }
}

/// Move a task to a new start date, keeping its duration
#[derive(Args)]
pub struct MoveTaskArgs {
    /// ID of the task to move
    pub id: u64,
    /// New start (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(short, long, help = "New start date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
    pub start: String,
    /// Contractor lane to move the task to
    #[arg(short, long, help = "Contractor lane to move the task to (default: current lane)")]
    pub lane: Option<u64>,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            id: val.id,
            start: val.start,
            lane: val.lane,
        }
    }
}

/// Drag one edge of a task to a new date
#[derive(Args)]
pub struct ResizeTaskArgs {
    /// ID of the task to resize
    pub id: u64,
    /// Edge to move
    #[arg(short, long, value_enum)]
    pub edge: EdgeArg,
    /// New date for the edge
    #[arg(short, long, help = "New date for the edge (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
    pub to: String,
}

impl From<ResizeTaskArgs> for ResizeTask {
    fn from(val: ResizeTaskArgs) -> Self {
        ResizeTask {
            id: val.id,
            edge: val.edge.to_string(),
            to: val.to,
        }
    }
}

/// Split a task in two after the given day
#[derive(Args)]
pub struct SplitTaskArgs {
    /// ID of the task to split
    pub id: u64,
    /// Last day of the first piece
    #[arg(short, long, help = "Last day of the first piece (YYYY-MM-DD)")]
    pub at: String,
}

impl From<SplitTaskArgs> for SplitTask {
    fn from(val: SplitTaskArgs) -> Self {
        SplitTask {
            id: val.id,
            at: val.at,
        }
    }
}

/// Show a task with its total, working and non-working days
#[derive(Args)]
pub struct TaskSummaryArgs {
    /// ID of the task
    pub id: u64,
}

impl From<TaskSummaryArgs> for TaskRef {
    fn from(val: TaskSummaryArgs) -> Self {
        TaskRef { id: val.id }
    }
}

/// Count days between two dates, inclusive
///
/// Works offline: holidays are taken from --holiday instead of the calendar
/// API.
#[derive(Args)]
pub struct DaysArgs {
    /// First day (YYYY-MM-DD)
    pub start: String,
    /// Last day (YYYY-MM-DD)
    pub end: String,
    /// Non-working day; may be repeated
    #[arg(long = "holiday", value_name = "DATE")]
    pub holidays: Vec<String>,
}

impl From<DaysArgs> for DayRange {
    fn from(val: DaysArgs) -> Self {
        DayRange {
            start: val.start,
            end: val.end,
            holidays: val.holidays,
        }
    }
}

/// Schedule subcommands
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Show contractor lanes and their tasks
    #[command(alias = "s")]
    Show(ShowScheduleArgs),
}

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Move a task, optionally to another contractor
    #[command(alias = "mv")]
    Move(MoveTaskArgs),
    /// Move the start or end of a task
    #[command(alias = "r")]
    Resize(ResizeTaskArgs),
    /// Split a task into two consecutive tasks
    Split(SplitTaskArgs),
    /// Show a task with its working-day counts
    #[command(alias = "s")]
    Summary(TaskSummaryArgs),
}

/// Command-line representation of a task edge
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    /// The first day of the task
    Start,
    /// The last day of the task
    End,
}

impl std::fmt::Display for EdgeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeArg::Start => write!(f, "start"),
            EdgeArg::End => write!(f, "end"),
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Executes commands against a loaded session and renders the results.
pub struct Cli<A: ScheduleApi> {
    session: ScheduleSession<A>,
    renderer: TerminalRenderer,
}

impl<A: ScheduleApi> Cli<A> {
    pub fn new(session: ScheduleSession<A>, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Show(args) => self.show_schedule(&args.into()),
        }
    }

    pub async fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Move(args) => {
                let outcome = self.session.move_task(&args.into()).await;
                self.report(&outcome)
            }
            TaskCommands::Resize(args) => {
                let outcome = self.session.resize_task(&args.into()).await;
                self.report(&outcome)
            }
            TaskCommands::Split(args) => {
                let outcome = self.session.split_task(&args.into()).await;
                self.report(&outcome)
            }
            TaskCommands::Summary(args) => {
                let summary = self.session.summary(&args.into())?;
                self.renderer.render(&summary.to_string())
            }
        }
    }

    pub fn show_schedule(&self, params: &ShowSchedule) -> Result<()> {
        let view = self.session.view(params)?;
        debug!("Showing {} tasks in {} lanes", view.tasks.len(), view.lanes.len());
        self.renderer.render(&view.to_string())
    }

    /// Renders the outcome; a warning or error makes the command fail.
    fn report(&self, outcome: &Outcome) -> Result<()> {
        self.renderer.render(&outcome.to_string())?;
        if !outcome.is_success() {
            bail!("The edit was not fully applied");
        }
        Ok(())
    }
}

/// Prints the day breakdown of a date range without contacting the API.
pub fn print_days(renderer: &TerminalRenderer, args: DaysArgs) -> Result<()> {
    let range: DayRange = args.into();
    let (start, end, holidays) = range.parse()?;
    let days = working_days_between(start, end, &holidays);
    renderer.render(&format!(
        "# {start} .. {end}\n\n- Total days: {}\n- Working days: {}\n- Non-working days: {}\n",
        days.total, days.working, days.off
    ))
}
