//! In-memory [`Surface`] that records every primitive call.

use super::color::Color;
use super::surface::{LineStyle, Surface, SurfaceError};

/// One primitive call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    LineWidth(f64),
    StrokeColor(Color),
    LineStyle(LineStyle),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    ClearRect(f64, f64, f64, f64),
}

/// A segment as it was committed by a `stroke` call, with the attributes in
/// effect at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Color,
    pub width: f64,
}

pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    /// Replays the log and returns the segments currently visible, i.e. those
    /// stroked after the last full clear.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut color = Color::new(0.0, 0.0, 0.0, 1.0);
        let mut width = 1.0;
        let mut path: Vec<(f64, f64)> = Vec::new();

        for op in &self.ops {
            match op {
                Op::LineWidth(w) => width = *w,
                Op::StrokeColor(c) => color = *c,
                Op::LineStyle(_) => {}
                Op::MoveTo(x, y) => path = vec![(*x, *y)],
                Op::LineTo(x, y) => path.push((*x, *y)),
                Op::Stroke => {
                    for pair in path.windows(2) {
                        segments.push(Segment {
                            from: pair[0],
                            to: pair[1],
                            color,
                            width,
                        });
                    }
                    path.clear();
                }
                Op::ClearRect(x, y, w, h) => {
                    if *x <= 0.0
                        && *y <= 0.0
                        && *w >= self.width as f64
                        && *h >= self.height as f64
                    {
                        segments.clear();
                    }
                }
            }
        }

        segments
    }

    /// Number of calls that changed pixels.
    pub fn paint_ops(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Stroke | Op::ClearRect(..)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            ops: Vec::new(),
        })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::StrokeColor(color));
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.ops.push(Op::LineStyle(style));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(Op::Stroke);
        Ok(())
    }

    fn clear_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), SurfaceError> {
        self.ops.push(Op::ClearRect(x, y, width, height));
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        // Not a real image; enough for callers that only move bytes around.
        Ok(format!("{} segments", self.segments().len()).into_bytes())
    }
}
