use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddCommands, DeleteArgs, EditArgs, OnArgs, ToggleArgs};

/// Main command-line interface for the Tempo tracker
///
/// Tempo is a personal task tracker distinguishing one-off goals, scheduled
/// on explicit calendar dates inside a start/deadline window, from recurring
/// routines, scheduled by a frequency-relative offset (day of week, day of
/// month, or day of year). The collection lives in a single JSON data file;
/// every command loads it, applies one validated operation, and writes it
/// back.
#[derive(Parser)]
#[command(version, about, name = "tp")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/tempo/tempo.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tempo CLI
///
/// Running `tp` with no command lists the whole collection.
#[derive(Subcommand)]
pub enum Commands {
    /// List every item in the collection
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the items scheduled on a date
    #[command(alias = "o")]
    On(OnArgs),
    /// Add a new goal or routine
    #[command(alias = "a")]
    Add {
        #[command(subcommand)]
        command: AddCommands,
    },
    /// Delete an item by description
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Toggle an item's active flag
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Replace a single attribute of an item
    #[command(alias = "e")]
    Edit(EditArgs),
}
