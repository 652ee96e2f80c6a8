//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the initial tool state,
//! the canvas size and the export directory.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::StrokeColor;
use crate::export::expand_tilde;
use crate::input::{SizeUnit, ToolState};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest canvas edge accepted from the config file.
const MAX_CANVAS_EDGE: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#00D8FF"
/// default_size = 3
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [export]
/// directory = "~/Pictures"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool state (color, size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Where exported drawings are written
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_color`: `#RRGGBB`
    /// - `default_size`: 1 - 10
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        if self.drawing.default_color.parse::<StrokeColor>().is_err() {
            log::warn!(
                "Invalid default_color '{}', falling back to '{}'",
                self.drawing.default_color,
                types::default_color()
            );
            self.drawing.default_color = types::default_color();
        }

        let (min, max) = (SizeUnit::MIN as i64, SizeUnit::MAX as i64);
        if !(min..=max).contains(&self.drawing.default_size) {
            log::warn!(
                "Invalid default_size {}, clamping to {}-{} range",
                self.drawing.default_size,
                min,
                max
            );
            self.drawing.default_size = self.drawing.default_size.clamp(min, max);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }
    }

    /// Tool state the canvas starts with.
    ///
    /// Values are expected to be validated already; anything unparsable falls
    /// back to the built-in defaults.
    pub fn tool_state(&self) -> ToolState {
        let color: StrokeColor = self.drawing.default_color.parse().unwrap_or_default();
        let size = SizeUnit::new(self.drawing.default_size).unwrap_or_default();
        ToolState::new(color, size)
    }

    /// Export directory with `~/` expanded.
    pub fn export_directory(&self) -> PathBuf {
        expand_tilde(&self.export.directory)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_str(contents: &str) -> Config {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        Config::load_from(&path).unwrap()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.tool_state(), ToolState::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = load_str("[drawing]\ndefault_size = 7\n");
        assert_eq!(config.tool_state().stroke_width(), 70);
        assert_eq!(config.drawing.default_color, "#00D8FF");
        assert_eq!(config.export.directory, ".");
    }

    #[test]
    fn invalid_values_are_clamped_or_replaced() {
        let config = load_str(
            "[drawing]\ndefault_color = \"cyan\"\ndefault_size = 42\n\n[canvas]\nwidth = 0\nheight = 100000\n",
        );
        assert_eq!(config.drawing.default_color, "#00D8FF");
        assert_eq!(config.drawing.default_size, 10);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.tool_state(), ToolState::default());
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "canvas", "export"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }
}
