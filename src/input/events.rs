//! Raw host input events and coordinate normalization.

/// A coordinate in surface-local space (origin at the surface's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Mouse event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed over the surface
    Down,
    /// Pointer moved over the surface
    Move,
    /// Button released
    Up,
    /// Pointer left the surface
    Leave,
}

/// Mouse event as delivered by the host.
///
/// Offsets are already relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, offset_x: f64, offset_y: f64) -> Self {
        Self {
            kind,
            offset_x,
            offset_y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }
}

/// Touch event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One active touch point, in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Touch event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Touch points currently on the screen, in the order the host reports them
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }

    /// The touch point that drives the stroke.
    pub fn primary(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

/// Where the surface's top-left corner sits in the viewport.
///
/// Touch coordinates arrive in viewport space and must be shifted by this
/// origin before they reach the stroke state machine. A surface filling the
/// whole viewport has the default origin `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOrigin {
    pub left: f64,
    pub top: f64,
}

impl SurfaceOrigin {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Converts a viewport coordinate to a surface-local one.
    pub fn to_local(&self, touch: TouchPoint) -> Point {
        Point::new(touch.client_x - self.left, touch.client_y - self.top)
    }
}

/// Whether the host should run the platform's default behaviour for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the platform handle the event normally
    Default,
    /// Suppress the platform default (scrolling, zooming, form submission)
    PreventDefault,
}
