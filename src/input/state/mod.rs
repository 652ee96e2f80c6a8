//! Stroke state machine and the drawing surface component.

mod mouse;
mod touch;


use super::events::Point;
use super::tool::{SizeUnit, ToolState};
use crate::draw::{LineStyle, StrokeColor, Surface, SurfaceError};
use crate::export::{ExportError, ExportedImage};
use log::{debug, info, trace, warn};

/// Whether a stroke is in progress.
///
/// The last recorded point only exists while a stroke is active, so a segment
/// can never be drawn from a stale position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeSession {
    /// No button or finger held down
    #[default]
    Idle,
    /// A stroke is being drawn
    Active {
        /// Where the previous segment ended (or where the stroke began)
        last_point: Point,
        /// Segments drawn since the stroke began
        segments: usize,
    },
}

impl StrokeSession {
    pub fn is_active(&self) -> bool {
        matches!(self, StrokeSession::Active { .. })
    }

    pub fn last_point(&self) -> Option<Point> {
        match self {
            StrokeSession::Idle => None,
            StrokeSession::Active { last_point, .. } => Some(*last_point),
        }
    }
}

/// The drawing canvas: owns the surface, the tool state and the stroke session.
///
/// Every mutation of the surface goes through this type. Input adapters
/// ([`on_pointer_event`](Self::on_pointer_event),
/// [`on_touch_event`](Self::on_touch_event)) normalize raw events into
/// surface-local points and drive the same state machine.
pub struct DrawingSurface<S: Surface> {
    surface: S,
    tools: ToolState,
    session: StrokeSession,
}

impl<S: Surface> DrawingSurface<S> {
    /// Allocates a surface of the given size and applies the initial paint
    /// attributes from `tools`.
    ///
    /// The dimensions are fixed for the lifetime of the canvas.
    pub fn initialize(width: u32, height: u32, tools: ToolState) -> Result<Self, SurfaceError> {
        let surface = S::allocate(width, height)?;
        let canvas = Self::with_surface(surface, tools);
        info!(
            "Drawing surface initialized: {}x{}, color {}, width {}",
            width,
            height,
            tools.stroke_color,
            tools.stroke_width()
        );
        Ok(canvas)
    }

    /// Wraps an already allocated surface.
    pub fn with_surface(surface: S, tools: ToolState) -> Self {
        let mut canvas = Self {
            surface,
            tools,
            session: StrokeSession::Idle,
        };
        canvas.surface.set_line_style(LineStyle::ROUND);
        canvas.sync_attributes();
        canvas
    }

    /// Pushes the current tool state into the surface's paint attributes.
    ///
    /// Called right after every tool state change so the next segment always
    /// uses the committed values.
    fn sync_attributes(&mut self) {
        self.surface
            .set_line_width(self.tools.stroke_width() as f64);
        self.surface
            .set_stroke_color(self.tools.stroke_color.to_color());
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Changes the stroke color for subsequent segments.
    ///
    /// Already drawn segments keep their color.
    pub fn set_color(&mut self, color: StrokeColor) {
        self.tools.stroke_color = color;
        self.sync_attributes();
        debug!("Stroke color set to {}", color);
    }

    /// Changes the stroke width to `size * 10` pixels.
    pub fn set_width(&mut self, size: SizeUnit) {
        self.tools.size = size;
        self.sync_attributes();
        debug!(
            "Stroke size set to {} ({} px)",
            size.get(),
            self.tools.stroke_width()
        );
    }

    /// Starts a stroke at `point`.
    ///
    /// If a stroke is already active its last point is simply replaced.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.session.is_active() {
            trace!("begin_stroke while active; restarting at {:?}", point);
        }
        self.session = StrokeSession::Active {
            last_point: point,
            segments: 0,
        };
    }

    /// Draws a segment from the last recorded point to `point`.
    ///
    /// Does nothing while no stroke is active.
    pub fn continue_stroke(&mut self, point: Point) {
        let StrokeSession::Active {
            last_point,
            segments,
        } = &mut self.session
        else {
            return;
        };

        self.surface.move_to(last_point.x, last_point.y);
        self.surface.line_to(point.x, point.y);
        if let Err(err) = self.surface.stroke() {
            warn!("Failed to stroke segment: {}", err);
        }
        trace!("segment {:?} -> {:?}", last_point, point);

        *last_point = point;
        *segments += 1;
    }

    /// Finishes the current stroke.
    pub fn end_stroke(&mut self) {
        if let StrokeSession::Active { segments, .. } = self.session {
            debug!("Stroke finished with {} segment(s)", segments);
        }
        self.session = StrokeSession::Idle;
    }

    /// Erases the whole surface. Tool state and the stroke session are untouched.
    pub fn clear(&mut self) {
        let (width, height) = (self.surface.width() as f64, self.surface.height() as f64);
        match self.surface.clear_rect(0.0, 0.0, width, height) {
            Ok(()) => info!("Canvas cleared"),
            Err(err) => warn!("Failed to clear canvas: {}", err),
        }
    }

    /// Encodes the current pixels as a PNG named `drawing.png`.
    pub fn export(&self) -> Result<ExportedImage, ExportError> {
        let png = self.surface.encode_png()?;
        debug!("Exported {} bytes of PNG", png.len());
        Ok(ExportedImage::new(png))
    }
}
