use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DaysArgs, ScheduleCommands, TaskCommands};

/// Command-line editor for contractor schedule timelines
///
/// Trestle loads a schedule (contractor lanes, task bars and the working
/// calendar) from the schedule API and lets you move, resize and split task
/// bars. Every edit is written back to the server. It can also run as an MCP
/// (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "trestle")]
pub struct Args {
    /// Path to the JSON settings file. Defaults to
    /// $XDG_CONFIG_HOME/trestle/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the schedule API, overriding the settings file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Schedule header to load, overriding the settings file
    #[arg(long, global = true)]
    pub header: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trestle CLI
///
/// - `schedule`: Show the timeline, optionally for one contractor
/// - `task`: Move, resize, split or inspect a task bar
/// - `days`: Count working days between two dates (offline)
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// View the schedule
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Edit or inspect tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Count total, working and non-working days of a date range
    Days(DaysArgs),
    /// Start the MCP server
    Serve,
}
