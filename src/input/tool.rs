//! Drawing tool configuration.

use crate::draw::StrokeColor;
use thiserror::Error;

/// Pixels of line width per step of the size control.
pub const WIDTH_PER_UNIT: u32 = 10;

/// Size-control value the canvas starts with.
pub const DEFAULT_SIZE_UNIT: SizeUnit = SizeUnit(3);

/// Error for a size outside the control's 1-10 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("size {0} is outside the range 1-10")]
pub struct SizeOutOfRange(pub i64);

/// Position of the size control, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeUnit(u8);

impl SizeUnit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, SizeOutOfRange> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SizeOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Line width in pixels this size maps to.
    pub fn stroke_width(self) -> u32 {
        self.0 as u32 * WIDTH_PER_UNIT
    }
}

impl Default for SizeUnit {
    fn default() -> Self {
        DEFAULT_SIZE_UNIT
    }
}

/// Color and width applied to newly drawn segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    pub stroke_color: StrokeColor,
    pub size: SizeUnit,
}

impl ToolState {
    pub fn new(stroke_color: StrokeColor, size: SizeUnit) -> Self {
        Self { stroke_color, size }
    }

    /// Current line width in pixels.
    pub fn stroke_width(&self) -> u32 {
        self.size.stroke_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_ten_times_the_size_unit() {
        assert_eq!(SizeUnit::new(1).unwrap().stroke_width(), 10);
        assert_eq!(SizeUnit::new(5).unwrap().stroke_width(), 50);
        assert_eq!(SizeUnit::new(10).unwrap().stroke_width(), 100);
    }

    #[test]
    fn size_outside_range_is_rejected() {
        assert_eq!(SizeUnit::new(0), Err(SizeOutOfRange(0)));
        assert_eq!(SizeUnit::new(11), Err(SizeOutOfRange(11)));
        assert_eq!(SizeUnit::new(-3), Err(SizeOutOfRange(-3)));
    }

    #[test]
    fn defaults_match_initial_canvas() {
        let tools = ToolState::default();
        assert_eq!(tools.stroke_color.to_hex(), "#00D8FF");
        assert_eq!(tools.size.get(), 3);
        assert_eq!(tools.stroke_width(), 30);
    }
}
