//! CLI Module
//!
//! Command-line interface for RenderBoy project files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RenderBoy - shot, layer and render bookkeeping
#[derive(Parser, Debug)]
#[command(name = "renderboy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project file from a directory of shot folders
    #[command(name = "scan")]
    Scan {
        /// Directory containing one folder per shot
        dir: PathBuf,

        /// Project file to write (defaults to <DIR>/renderboy.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the project tree
    #[command(name = "show")]
    Show {
        /// Path to the project file
        file: PathBuf,
    },

    /// List shots, optionally filtered by a name substring
    #[command(name = "shots")]
    Shots {
        /// Path to the project file
        file: PathBuf,

        /// Only list shots whose name contains this text
        query: Option<String>,
    },

    /// Add an empty shot
    #[command(name = "add-shot")]
    AddShot {
        /// Path to the project file
        file: PathBuf,

        /// Name of the new shot
        name: String,
    },

    /// Remove a shot and everything in it
    #[command(name = "remove-shot")]
    RemoveShot {
        /// Path to the project file
        file: PathBuf,

        /// Name of the shot to remove
        name: String,
    },

    /// Add an auto-named layer to a shot
    #[command(name = "add-layer")]
    AddLayer {
        /// Path to the project file
        file: PathBuf,

        /// Shot to add the layer to
        shot: String,
    },

    /// Remove a layer from a shot
    #[command(name = "remove-layer")]
    RemoveLayer {
        /// Path to the project file
        file: PathBuf,

        /// Shot holding the layer
        shot: String,

        /// Layer to remove
        layer: String,
    },

    /// Rename a layer
    #[command(name = "rename-layer")]
    RenameLayer {
        /// Path to the project file
        file: PathBuf,

        /// Shot holding the layer
        shot: String,

        /// Current layer name
        layer: String,

        /// New layer name
        new_name: String,
    },
}
