//! Event scripts: recorded host input replayed against the canvas.
//!
//! A script lists pointer, touch and control events in the order the host
//! would have delivered them. TOML and JSON are both accepted:
//!
//! ```toml
//! [[events]]
//! type = "pointer-down"
//! x = 10.0
//! y = 10.0
//!
//! [[events]]
//! type = "touch-move"
//! touches = [[20.0, 20.0]]
//!
//! [[events]]
//! type = "set-color"
//! value = "#FF0000"
//! ```

use crate::input::{PointerEvent, PointerKind, TouchEvent, TouchPhase, TouchPoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),
}

/// One event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostEvent {
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    PointerLeave {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Touch points are viewport coordinates `[x, y]`
    TouchStart {
        touches: Vec<[f64; 2]>,
    },
    TouchMove {
        touches: Vec<[f64; 2]>,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<[f64; 2]>,
    },
    TouchCancel {
        #[serde(default)]
        touches: Vec<[f64; 2]>,
    },
    /// Color picker changed
    SetColor {
        value: String,
    },
    /// Size slider changed
    SetSize {
        value: i64,
    },
    /// Clear button pressed
    Clear,
    /// Download link clicked
    Export,
    /// Controls form submitted
    Submit,
}

/// Input-device view of a host event.
pub enum DeviceEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
}

impl HostEvent {
    /// Converts pointer and touch events into their device form; control
    /// events yield `None`.
    pub fn as_device_event(&self) -> Option<DeviceEvent> {
        match self {
            HostEvent::PointerDown { x, y } => pointer(PointerKind::Down, *x, *y),
            HostEvent::PointerMove { x, y } => pointer(PointerKind::Move, *x, *y),
            HostEvent::PointerUp { x, y } => pointer(PointerKind::Up, *x, *y),
            HostEvent::PointerLeave { x, y } => pointer(PointerKind::Leave, *x, *y),
            HostEvent::TouchStart { touches } => touch(TouchPhase::Start, touches),
            HostEvent::TouchMove { touches } => touch(TouchPhase::Move, touches),
            HostEvent::TouchEnd { touches } => touch(TouchPhase::End, touches),
            HostEvent::TouchCancel { touches } => touch(TouchPhase::Cancel, touches),
            HostEvent::SetColor { .. }
            | HostEvent::SetSize { .. }
            | HostEvent::Clear
            | HostEvent::Export
            | HostEvent::Submit => None,
        }
    }
}

fn pointer(kind: PointerKind, x: f64, y: f64) -> Option<DeviceEvent> {
    Some(DeviceEvent::Pointer(PointerEvent::new(kind, x, y)))
}

fn touch(phase: TouchPhase, touches: &[[f64; 2]]) -> Option<DeviceEvent> {
    let touches = touches
        .iter()
        .map(|&[client_x, client_y]| TouchPoint { client_x, client_y })
        .collect();
    Some(DeviceEvent::Touch(TouchEvent::new(phase, touches)))
}

/// A recorded sequence of host events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<HostEvent>,
}

impl Script {
    pub fn from_toml(contents: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json(contents: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads a script, choosing JSON for `.json` files and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let script = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_toml(&contents)?
        };
        log::debug!("Loaded {} event(s) from {}", script.events.len(), path.display());
        Ok(script)
    }

    pub fn has_export(&self) -> bool {
        self.events.iter().any(|e| matches!(e, HostEvent::Export))
    }
}
