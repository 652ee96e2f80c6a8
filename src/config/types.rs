//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state the canvas starts with. Users can change both
/// values at runtime with the size slider and the color picker.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial stroke color as `#RRGGBB`
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Initial size-control position (valid range: 1 - 10, width = size * 10 px)
    #[serde(default = "default_size")]
    pub default_size: i64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
        }
    }
}

/// Canvas dimensions.
///
/// The surface is sized once at startup and never resized.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Viewport width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Viewport height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory `drawing.png` is written to (`~/` is expanded)
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_color() -> String {
    "#00D8FF".to_string()
}

pub(super) fn default_size() -> i64 {
    3
}

pub(super) fn default_width() -> u32 {
    800
}

pub(super) fn default_height() -> u32 {
    600
}

fn default_directory() -> String {
    ".".to_string()
}
