//! Map (json) subcommand for appcs-convert.
//!
//! Converts a JSON source mapping key names to entries into one
//! environment's KV import document.

use crate::env::Environment;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the map subcommand
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Path to the source JSON file (a map from key name to entry)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target environment to resolve
    #[arg(long, value_enum, value_name = "ENV")]
    pub env: Environment,

    /// Output document path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}
