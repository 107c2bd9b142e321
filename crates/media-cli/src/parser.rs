//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the media catalog.
#[derive(Parser)]
#[command(name = "media-catalog")]
#[command(about = "Store and serve a catalog of media items")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(
        long = "database",
        env = "MEDIA_DATABASE_PATH",
        default_value = "media-catalog.db",
        global = true
    )]
    pub database: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
