//! RenderBoy CLI
//!
//! Command-line interface for RenderBoy project files.

use clap::Parser;
use env_logger::Env;
use log::debug;

use renderboy::cli::{commands, Cli, Commands};
use renderboy::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("RenderBoy v{}", env!("CARGO_PKG_VERSION"));

    handle_command(cli.command)
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Scan { dir, output } => commands::scan(&dir, output.as_deref()),
        Commands::Show { file } => commands::show(&file),
        Commands::Shots { file, query } => commands::list_shots(&file, query.as_deref()),
        Commands::AddShot { file, name } => commands::add_shot(&file, &name),
        Commands::RemoveShot { file, name } => commands::remove_shot(&file, &name),
        Commands::AddLayer { file, shot } => commands::add_layer(&file, &shot),
        Commands::RemoveLayer { file, shot, layer } => {
            commands::remove_layer(&file, &shot, &layer)
        }
        Commands::RenameLayer {
            file,
            shot,
            layer,
            new_name,
        } => commands::rename_layer(&file, &shot, &layer, &new_name),
    }
}
