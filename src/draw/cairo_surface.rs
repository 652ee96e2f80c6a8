//! Cairo-backed implementation of [`Surface`].

use super::color::Color;
use super::surface::{LineCap, LineJoin, LineStyle, Surface, SurfaceError};

/// Largest width/height accepted by Cairo image surfaces.
const MAX_DIMENSION: u32 = 32767;

/// An ARGB32 Cairo image surface together with its drawing context.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: u32,
    height: u32,
}

impl CairoSurface {
    /// Returns the un-premultiplied `[r, g, b, a]` value of a pixel, or `None`
    /// when the coordinate lies outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Option<[u8; 4]>, SurfaceError> {
        if x >= self.width || y >= self.height {
            return Ok(None);
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut argb = 0u32;
        self.surface.with_data(|data| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&data[offset..offset + 4]);
            argb = u32::from_ne_bytes(bytes);
        })?;

        Ok(Some(unpremultiply(argb)))
    }

    /// Returns true if any pixel is not fully transparent.
    pub fn has_content(&self) -> Result<bool, SurfaceError> {
        self.surface.flush();
        let mut painted = false;
        self.surface.with_data(|data| {
            painted = data.iter().any(|byte| *byte != 0);
        })?;
        Ok(painted)
    }
}

fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) & 0xFF;
    let channel = |shift: u32| {
        let c = (argb >> shift) & 0xFF;
        if a == 0 { 0 } else { ((c * 255 + a / 2) / a).min(255) as u8 }
    };
    [channel(16), channel(8), channel(0), a as u8]
}

impl Surface for CairoSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        let ctx = cairo::Context::new(&surface)?;
        log::debug!("Allocated {}x{} cairo surface", width, height);

        Ok(Self {
            surface,
            ctx,
            width,
            height,
        })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.ctx.set_line_join(match style.join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
        self.ctx.set_line_cap(match style.cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.new_path();
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.ctx.stroke()?;
        Ok(())
    }

    fn clear_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), SurfaceError> {
        // save/restore keeps the stroke source and operator intact
        self.ctx.save()?;
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        let filled = self.ctx.fill();
        self.ctx.restore()?;
        filled?;
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut png = Vec::new();
        self.surface.write_to_png(&mut png)?;
        Ok(png)
    }
}
