//! Raster surface primitives (Cairo-based).
//!
//! This module defines the drawing target used by the canvas:
//! - [`Color`] / [`StrokeColor`]: RGBA color and the validated `#RRGGBB` pen color
//! - [`Surface`]: primitive 2D operations a drawing target must provide
//! - [`CairoSurface`]: the Cairo image surface implementation

pub mod cairo_surface;
pub mod color;
#[cfg(test)]
pub(crate) mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::{Color, DEFAULT_STROKE_COLOR, ParseColorError, StrokeColor};
pub use surface::{LineCap, LineJoin, LineStyle, Surface, SurfaceError, png_data_url};
