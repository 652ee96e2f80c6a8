//! Raster surface abstraction.
//!
//! [`Surface`] is the set of primitive 2D operations the drawing pipeline
//! needs from its host: paint attributes, path construction, stroking,
//! clearing and PNG encoding. [`super::CairoSurface`] is the production
//! implementation.

use super::color::Color;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// How the ends of a stroked path are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// How corners between connected segments are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Join and cap style applied to every stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub join: LineJoin,
    pub cap: LineCap,
}

impl LineStyle {
    /// Round joins and caps, so consecutive short segments read as one smooth stroke.
    pub const ROUND: LineStyle = LineStyle {
        join: LineJoin::Round,
        cap: LineCap::Round,
    };
}

/// Errors raised by a surface provider.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("surface pixels are not accessible: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Primitive operations of a 2D raster drawing target.
///
/// Paint attributes are sticky: once set they apply to every following
/// [`stroke`](Surface::stroke) until changed.
pub trait Surface {
    /// Allocates a new, fully transparent surface.
    fn allocate(width: u32, height: u32) -> Result<Self, SurfaceError>
    where
        Self: Sized;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn set_line_width(&mut self, width: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_style(&mut self, style: LineStyle);

    /// Discards the current path and starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Paints the current path with the current attributes and discards it.
    fn stroke(&mut self) -> Result<(), SurfaceError>;

    /// Resets the given rectangle to fully transparent pixels.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64)
    -> Result<(), SurfaceError>;

    /// Encodes the current pixels as a PNG image.
    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError>;

    /// Encodes the current pixels as a `data:image/png;base64,...` URL.
    fn encode_data_url(&self) -> Result<String, SurfaceError> {
        Ok(png_data_url(&self.encode_png()?))
    }
}

/// Wraps PNG bytes in a base64 data URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
