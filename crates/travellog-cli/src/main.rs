//! Travellog CLI application.
//!
//! Command-line front end for writing and sharing travel logs.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use travellog_core::{LogbookBuilder, Writer};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        email,
        username,
        command,
    } = Args::parse();

    let logbook = LogbookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize logbook")?;

    let cli = Cli::new(
        logbook,
        TerminalRenderer::new(!no_color),
        Writer::new(email, username),
    );

    info!("Travellog started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Log { command }) => cli.handle_log_command(command).await,
        Some(Like(args)) => cli.toggle_like(args).await,
        Some(Liked) => cli.list_liked().await,
        Some(Comment(args)) => cli.add_comment(args).await,
        Some(Follow(args)) => cli.follow(args).await,
        Some(Friends) => cli.list_friend_logs().await,
        Some(Draft { command }) => cli.handle_draft_command(command).await,
        None => cli.list_logs().await,
    }
}
