//! appcs-convert
//!
//! Converts CSV or JSON configuration sources into App Configuration
//! key-value import documents, one per deployment environment.

use anyhow::Result;
use appcs_convert::cli::{Cli, Command};
use appcs_convert::config::Config;
use appcs_convert::pipeline;
use clap::Parser;
use std::fs::OpenOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    match cli.command {
        Command::Csv(args) => {
            let written = pipeline::run_csv_file(
                &config,
                &args.file,
                &args.environments(),
                args.value_kind(),
                args.out_dir.as_deref(),
            )?;
            for path in written {
                println!("Appended and wrote {}", path.display());
            }
        }
        Command::Map(args) => {
            let path = pipeline::run_map_file(&args.file, args.env, &args.output)?;
            println!("Converted and saved to {}", path.display());
        }
    }

    Ok(())
}
