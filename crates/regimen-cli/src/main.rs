//! Regimen CLI Application
//!
//! Command-line host for the training program builder. Every invocation
//! reopens the saved draft, applies one command and persists the result.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use regimen_core::WizardBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open program builder")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Regimen started");

    let mut cli = Cli::new(wizard, renderer);
    match command {
        Some(Info(args)) => cli.handle_info(args),
        Some(Week { command }) => cli.handle_week_command(command),
        Some(Workout { command }) => cli.handle_workout_command(command),
        Some(Exercise { command }) => cli.handle_exercise_command(command),
        Some(Step { command }) => cli.handle_step_command(command),
        Some(Dispatch(args)) => cli.handle_dispatch(args),
        Some(Preview) => cli.preview(),
        Some(Submit) => cli.submit(),
        Some(Discard) => cli.discard(),
        Some(Schema) => cli.print_schema(),
        None => cli.show_overview(),
    }
}
