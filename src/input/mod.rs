//! Input handling and stroke state machine.
//!
//! This module translates host mouse and touch events into stroke segments.
//! It owns the current tool state (color, width) and the stroke session, and
//! normalizes both input sources to surface-local coordinates so a single
//! state machine handles them.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{
    Disposition, Point, PointerEvent, PointerKind, SurfaceOrigin, TouchEvent, TouchPhase,
    TouchPoint,
};
pub use state::{DrawingSurface, StrokeSession};
pub use tool::{SizeOutOfRange, SizeUnit, ToolState};
