//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Error;
use crate::plan::DEFAULT_STATE_VAR;
use crate::render::NodeStyle;

/// Andor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub state_var: String,
    pub style: NodeStyle,
    pub indent_width: usize,
    pub max_depth: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub require_non_empty_conditionals: bool,
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            state_var: DEFAULT_STATE_VAR.to_string(),
            style: NodeStyle::Unicode,
            indent_width: 4,
            max_depth: -1,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_non_empty_conditionals: true,
            max_depth: 64,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("ANDOR_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("andor")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        let state_var = &self.render.state_var;
        if state_var.is_empty() {
            return Err(Error::ConfigError("render.state_var cannot be empty".to_string()));
        }
        if !state_var.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            || state_var.starts_with(|c: char| c.is_ascii_digit())
        {
            return Err(Error::ConfigError(format!(
                "render.state_var must be an identifier (letters, digits, underscores), got '{}'",
                state_var
            )));
        }
        if !(2..=16).contains(&self.render.indent_width) {
            return Err(Error::ConfigError(
                "render.indent_width must be between 2 and 16".to_string(),
            ));
        }
        if self.render.max_depth < -1 {
            return Err(Error::ConfigError(
                "render.max_depth must be -1 (unlimited) or greater".to_string(),
            ));
        }
        if self.validation.max_depth == 0 {
            return Err(Error::ConfigError("validation.max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
