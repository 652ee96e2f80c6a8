//! User controls around the canvas.
//!
//! The controls are the validation boundary: raw values from the size slider
//! and the color picker are checked here, so the canvas only ever receives a
//! [`SizeUnit`] in range and a well-formed [`StrokeColor`].

use crate::draw::{ParseColorError, StrokeColor, Surface};
use crate::export::{ExportError, ExportedImage};
use crate::input::{Disposition, DrawingSurface, SizeOutOfRange, SizeUnit};
use thiserror::Error;

/// Rejected control input.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Hexadecimal value required: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Invalid size: {0}")]
    SizeOutOfRange(#[from] SizeOutOfRange),
}

/// Range control selecting the stroke size (1-10).
pub struct SizeControl;

impl SizeControl {
    /// Applies a slider value to the canvas.
    pub fn apply<S: Surface>(
        canvas: &mut DrawingSurface<S>,
        value: i64,
    ) -> Result<SizeUnit, ControlError> {
        let size = SizeUnit::new(value)?;
        canvas.set_width(size);
        Ok(size)
    }
}

/// Color picker constrained to `^#[A-Fa-f0-9]{6}$`.
pub struct ColorControl;

impl ColorControl {
    /// Applies a picker value to the canvas.
    pub fn apply<S: Surface>(
        canvas: &mut DrawingSurface<S>,
        value: &str,
    ) -> Result<StrokeColor, ControlError> {
        let color: StrokeColor = value.parse()?;
        canvas.set_color(color);
        Ok(color)
    }
}

/// Button that wipes the canvas.
pub struct ClearButton;

impl ClearButton {
    pub fn press<S: Surface>(canvas: &mut DrawingSurface<S>) {
        canvas.clear();
    }
}

/// Link that downloads the canvas as `drawing.png`.
pub struct ExportButton;

impl ExportButton {
    pub fn press<S: Surface>(canvas: &DrawingSurface<S>) -> Result<ExportedImage, ExportError> {
        canvas.export()
    }
}

/// The form wrapping the controls is never submitted.
pub fn on_form_submit() -> Disposition {
    Disposition::PreventDefault
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::RecordingSurface;
    use crate::input::ToolState;

    fn canvas() -> DrawingSurface<RecordingSurface> {
        DrawingSurface::initialize(100, 100, ToolState::default()).unwrap()
    }

    #[test]
    fn size_control_accepts_range_and_rejects_outside() {
        let mut canvas = canvas();
        assert_eq!(SizeControl::apply(&mut canvas, 7).unwrap().get(), 7);
        assert_eq!(canvas.tools().stroke_width(), 70);

        let err = SizeControl::apply(&mut canvas, 11).unwrap_err();
        assert!(matches!(err, ControlError::SizeOutOfRange(_)));
        assert_eq!(canvas.tools().stroke_width(), 70);
    }

    #[test]
    fn color_control_rejects_malformed_values_without_touching_state() {
        let mut canvas = canvas();
        let err = ColorControl::apply(&mut canvas, "red").unwrap_err();
        assert!(err.to_string().starts_with("Hexadecimal value required"));
        assert_eq!(canvas.tools().stroke_color.to_hex(), "#00D8FF");

        ColorControl::apply(&mut canvas, "#a0b1c2").unwrap();
        assert_eq!(canvas.tools().stroke_color.to_hex(), "#A0B1C2");
    }

    #[test]
    fn form_submission_is_suppressed() {
        assert_eq!(on_form_submit(), Disposition::PreventDefault);
    }
}
