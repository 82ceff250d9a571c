//! Tempo CLI Application
//!
//! Command-line interface for the tempo goal and routine tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{AddCommands, Cli};
use log::info;
use renderer::TerminalRenderer;
use tempo_core::TrackerBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, no_color, command } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tempo started");

    let cli = Cli::new(tracker, renderer);

    match command {
        Some(On(args)) => cli.items_on_date(args),
        Some(Add { command }) => match command {
            AddCommands::Goal(args) => cli.add_goal(args),
            AddCommands::Routine(args) => cli.add_routine(args),
        },
        Some(Delete(args)) => cli.delete_item(args),
        Some(Toggle(args)) => cli.toggle_item(args),
        Some(Edit(args)) => cli.edit_item(args),
        Some(List) | None => cli.list_items(),
    }
}
