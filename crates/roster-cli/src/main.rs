//! Roster CLI Application
//!
//! Interactive menu console for the roster student records manager.

mod args;
mod console;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use console::Console;
use log::info;
use renderer::TerminalRenderer;
use roster_core::RosterBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
    } = Args::parse();

    let roster = RosterBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize roster")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roster started");

    let stdin = std::io::stdin();
    Console::new(roster, renderer, stdin.lock())
        .run()
        .context("Console session failed")
}
