//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    AvailabilityCommand, CompletionsCommand, InitCommand, ListCommand, ReserveCommand,
    RoomCommand, ShowCommand, UserCommand,
};

/// Command-line tool for managing meeting-room reservations.
#[derive(Parser)]
#[command(name = "bookme")]
#[command(version, about = "Manage meeting-room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BOOKME_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "BOOKME_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "BOOKME_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Manage users
    #[command(subcommand)]
    User(UserCommand),

    /// Manage rooms
    #[command(subcommand)]
    Room(RoomCommand),

    /// Book a room for a user
    Reserve(ReserveCommand),

    /// Show a reservation by id
    Show(ShowCommand),

    /// List the reservations of a room
    List(ListCommand),

    /// Show the free slots of a room on a date
    Availability(AvailabilityCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
