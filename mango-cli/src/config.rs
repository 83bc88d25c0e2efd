//! CLI configuration management
//!
//! Handles loading and saving CLI-specific configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Task database path; defaults to the per-user location when unset
    pub db_path: Option<PathBuf>,

    /// Default output format
    pub output_format: String,

    /// Enable verbose logging by default
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            output_format: "table".to_string(),
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read CLI config file")?;

            toml::from_str(&content).context("Failed to parse CLI config file")
        } else {
            // Create default config and save it
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to its default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize CLI config")?;

        std::fs::write(config_path, content).context("Failed to write CLI config file")?;
        debug!(path = %config_path.display(), "saved CLI config");

        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine config directory"))?;

        Ok(config_dir.join("mango").join("cli.toml"))
    }

    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Priority chain (lowest to highest):
/// 1. Defaults
/// 2. Config file
/// 3. Environment variables
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    db_path: Option<PathBuf>,
    output_format: Option<String>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load values from the config file (skipped when `load` is false)
    pub fn with_config_file(mut self, load: bool) -> Result<Self> {
        if load {
            let config = CliConfig::load()?;
            self.db_path = config.db_path;
            self.output_format = Some(config.output_format);
            self.verbose = Some(config.verbose);
        }
        Ok(self)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(db_path) = std::env::var("MANGO_DB") {
            self.db_path = Some(PathBuf::from(db_path));
        }

        if let Ok(format) = std::env::var("MANGO_FORMAT") {
            self.output_format = Some(format);
        }

        if let Ok(verbose) = std::env::var("MANGO_VERBOSE") {
            self.verbose = Some(verbose.to_lowercase() == "true" || verbose == "1");
        }

        self
    }

    /// Override the task database path
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Override the output format ("table" or "json")
    pub fn with_output_format(mut self, format: &str) -> Result<Self> {
        match format {
            "table" | "json" => {
                self.output_format = Some(format.to_string());
                Ok(self)
            }
            other => Err(anyhow::anyhow!("Invalid output format: {}", other)),
        }
    }

    /// Override the verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build final configuration with validation
    pub fn build(self) -> Result<CliConfig> {
        let output_format = self.output_format.unwrap_or_else(|| "table".to_string());
        if output_format != "table" && output_format != "json" {
            return Err(anyhow::anyhow!("Invalid output format: {}", output_format));
        }

        Ok(CliConfig {
            db_path: self.db_path,
            output_format,
            verbose: self.verbose.unwrap_or(false),
        })
    }
}
