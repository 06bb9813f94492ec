//! Configuration management for the benchmark tool
//!
//! Run settings can come from a TOML file, environment variables, and CLI
//! flags; later layers override earlier ones.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for one benchmark invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of keys in the corpus
    pub num_keys: u64,

    /// Hasher to benchmark; None runs every known hasher
    pub hasher: Option<String>,

    /// Newline-delimited string key file; None synthesizes integer keys
    pub input: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_keys: 0,
            hasher: None,
            input: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        use std::env;

        if let Ok(n) = env::var("HP_NUM_KEYS") {
            self.num_keys = n.parse()
                .map_err(|e| Error::config(format!("Invalid key count: {}", e)))?;
        }

        if let Ok(name) = env::var("HP_HASHER") {
            self.hasher = Some(name);
        }

        if let Ok(path) = env::var("HP_INPUT") {
            self.input = Some(PathBuf::from(path));
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.num_keys == 0 {
            return Err(Error::config("Key count must be a positive integer"));
        }

        Ok(())
    }
}
