use crate::draw::Surface;
use crate::input::events::{Disposition, PointerEvent, PointerKind};

use super::DrawingSurface;

impl<S: Surface> DrawingSurface<S> {
    /// Processes a mouse event.
    ///
    /// Mouse offsets are already surface-local, so they feed the stroke state
    /// machine unchanged.
    ///
    /// # Behavior
    /// - Down: starts a stroke at the pointer
    /// - Move: extends the stroke while a button is held
    /// - Up / Leave: finishes the stroke
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Disposition {
        match event.kind {
            PointerKind::Down => self.begin_stroke(event.position()),
            PointerKind::Move => self.continue_stroke(event.position()),
            PointerKind::Up | PointerKind::Leave => self.end_stroke(),
        }
        Disposition::Default
    }
}
