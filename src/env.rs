//! Deployment environments recognized by both pipelines.
//!
//! The allow-list is a single shared constant: CLI validation, CSV column
//! matching, and the batch writer all consume [`Environment::ALL`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named deployment target for which a distinct configuration value may
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Auto,
    Test,
    Stage,
    Train,
    Prod,
}

impl Environment {
    /// Every recognized environment, in canonical order.
    pub const ALL: [Environment; 6] = [
        Environment::Dev,
        Environment::Auto,
        Environment::Test,
        Environment::Stage,
        Environment::Train,
        Environment::Prod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Auto => "auto",
            Environment::Test => "test",
            Environment::Stage => "stage",
            Environment::Train => "train",
            Environment::Prod => "prod",
        }
    }

    /// Check whether a CSV header cell selects this environment.
    ///
    /// Matching is a case-insensitive prefix test, so headers like
    /// "Dev value" or "PROD (eastus)" still map to their environment.
    pub fn matches_column(&self, header: &str) -> bool {
        header.to_lowercase().starts_with(self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
