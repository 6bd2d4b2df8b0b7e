//! Configuration loading and management.

use crate::env::Environment;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Naming convention for per-environment batch output; `{env}` is
    /// substituted with the environment name.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Abort instead of starting fresh when an existing output document
    /// fails to parse during an append run.
    #[serde(default)]
    pub strict_merge: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_pattern: default_file_pattern(),
            strict_merge: false,
        }
    }
}

fn default_file_pattern() -> String {
    "appcs-{env}-kv.json".to_string()
}

impl OutputConfig {
    /// Output file name for one environment.
    pub fn file_name(&self, env: Environment) -> String {
        self.file_pattern.replace("{env}", env.as_str())
    }
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations or return defaults.
    pub fn load_or_default() -> Self {
        // Try appcs-convert.yaml in the working directory.
        if let Ok(config) = Self::load("appcs-convert.yaml") {
            return config;
        }

        // Then the user-level config directory.
        if let Some(dir) = dirs::config_dir() {
            if let Ok(config) = Self::load(dir.join("appcs-convert/config.yaml")) {
                return config;
            }
        }

        // Fall back to defaults with environment variable overrides.
        let mut config = Self::default();

        if let Ok(pattern) = std::env::var("APPCS_CONVERT_FILE_PATTERN") {
            config.output.file_pattern = pattern;
        }

        if let Ok(strict) = std::env::var("APPCS_CONVERT_STRICT_MERGE") {
            if let Ok(strict) = strict.parse() {
                config.output.strict_merge = strict;
            }
        }

        config
    }
}
