//! CLI module - Command-line interface for Showcase
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Showcase - read-only catalog API for 90s TV shows
#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file, instead of searching the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "web")]
    Serve,

    /// List every show in the catalog
    #[command(alias = "ls", alias = "l")]
    List,

    /// Print one show as JSON
    #[command(alias = "info", alias = "i")]
    Show {
        /// Show ID
        id: String,
    },

    /// Import shows from a JSON array file
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
