//! Daycount CLI Application
//!
//! Terminal front end and MCP server for the daycount D-Day tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use daycount_core::{TrackerBuilder, dates::FixedClock};
use log::info;
use mcp::{DaycountMcpServer, run_stdio_server};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        locale,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_locale(locale.into());
    if let Some(today) = today {
        builder = builder.with_clock(FixedClock::local(today));
    }
    let tracker = builder
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Daycount started with {}", tracker.database_path().display());

    match command {
        Some(Commands::Serve) => {
            info!("Starting Daycount MCP server");
            run_stdio_server(DaycountMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        Some(command) => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .handle_command(command)
                .await
        }
        None => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .dashboard()
                .await
        }
    }
}
