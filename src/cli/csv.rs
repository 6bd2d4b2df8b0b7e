//! Tabular (csv) subcommand for appcs-convert.
//!
//! Converts a CSV source with one column per environment into
//! per-environment KV import documents, appending onto any documents already
//! on disk at the destination.

use crate::encode::ValueKind;
use crate::env::Environment;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the csv subcommand
#[derive(Args, Debug)]
pub struct CsvArgs {
    /// Path to the source CSV file
    ///
    /// The header row names the key column first, then one column per
    /// environment (matched case-insensitively by prefix).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only emit a document for this environment
    ///
    /// By default one document is written for every recognized environment
    /// (dev, auto, test, stage, train, prod).
    #[arg(long, value_enum, value_name = "ENV")]
    pub env: Option<Environment>,

    /// Treat every resolved value as a key vault reference
    ///
    /// Values are wrapped as {"uri": ...} and tagged with the key vault
    /// reference content type.
    #[arg(long)]
    pub kv_reference: bool,

    /// Directory for output documents (default: alongside the source file)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl CsvArgs {
    /// Environments this run emits documents for.
    pub fn environments(&self) -> Vec<Environment> {
        match self.env {
            Some(env) => vec![env],
            None => Environment::ALL.to_vec(),
        }
    }

    /// Value type applied uniformly to every resolved row.
    pub fn value_kind(&self) -> ValueKind {
        if self.kv_reference {
            ValueKind::KvReference
        } else {
            ValueKind::String
        }
    }
}
