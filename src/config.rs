use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Default file looked up in the working directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Main configuration structure.
///
/// Only diagnostics are configurable; the demo output itself is fixed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Diagnostic log settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level used when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
        }
    }
}

fn default_level() -> String { "warn".to_string() }

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}
