//! Trestle CLI Application
//!
//! Command-line interface and MCP server for the Trestle schedule timeline.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{print_days, Cli};
use log::info;
use mcp::{run_stdio_server, TrestleMcpServer};
use renderer::TerminalRenderer;
use trestle_core::{params::ShowSchedule, SessionBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        api_url,
        header,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Day counting never needs the server.
    if let Some(Days(args)) = command {
        return print_days(&renderer, args);
    }

    let builder = SessionBuilder::new()
        .with_config_path(config)
        .with_api_base_url(api_url)
        .with_header_id(header);
    let settings = builder.settings().context("Failed to load settings")?;
    info!(
        "Loading schedule {} from {}",
        settings.header_id, settings.api_base_url
    );
    let session = builder
        .build()
        .await
        .context("Failed to load the schedule")?;

    match command {
        Some(Schedule { command }) => Cli::new(session, renderer).handle_schedule_command(command),
        Some(Task { command }) => {
            Cli::new(session, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Trestle MCP server");
            run_stdio_server(TrestleMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Days(_)) | None => {
            Cli::new(session, renderer).show_schedule(&ShowSchedule::default())
        }
    }
}
