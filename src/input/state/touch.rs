use crate::draw::Surface;
use crate::input::events::{Disposition, SurfaceOrigin, TouchEvent, TouchPhase};
use log::trace;

use super::DrawingSurface;

impl<S: Surface> DrawingSurface<S> {
    /// Processes a touch event.
    ///
    /// Touch points are in viewport coordinates; `origin` converts the first
    /// touch point into surface-local space before it reaches the stroke state
    /// machine. Touch start always asks the host to suppress the platform's
    /// default gesture handling so the page does not scroll while drawing.
    pub fn on_touch_event(&mut self, event: &TouchEvent, origin: SurfaceOrigin) -> Disposition {
        match event.phase {
            TouchPhase::Start => {
                match event.primary() {
                    Some(touch) => self.begin_stroke(origin.to_local(touch)),
                    None => trace!("touch start without touch points"),
                }
                Disposition::PreventDefault
            }
            TouchPhase::Move => {
                if let Some(touch) = event.primary() {
                    self.continue_stroke(origin.to_local(touch));
                }
                Disposition::Default
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.end_stroke();
                Disposition::Default
            }
        }
    }
}
