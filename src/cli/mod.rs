//! CLI command definitions for appcs-convert.
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod csv;
pub mod map;

use clap::{Parser, Subcommand};
use csv::CsvArgs;
use map::MapArgs;

/// Configuration source to App Configuration KV document converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a CSV source into per-environment KV documents
    Csv(CsvArgs),

    /// Convert a JSON map source into one environment's KV document
    Map(MapArgs),
}
