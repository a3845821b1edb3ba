use crate::input::events::{PointerId, TouchEvent};
use log::debug;

use super::DoodleState;

impl DoodleState {
    /// Routes a touch event to the stroke tracker and compositor.
    ///
    /// # Behavior
    /// - `Down`: starts (or restarts) the stroke for that pointer
    /// - `Move`: extends every tracked pointer that moved past the tolerance
    /// - `Up`: bakes the pointer's stroke into the buffer and resets its path
    ///
    /// Every event requests a redraw.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        match event {
            TouchEvent::Down { id, x, y } => self.tracker.touch_started(*x, *y, *id),
            TouchEvent::Move { pointers } => {
                self.tracker.touch_moved(pointers);
            }
            TouchEvent::Up { id } => self.on_touch_end(*id),
        }
        self.needs_redraw = true;
    }

    fn on_touch_end(&mut self, id: PointerId) {
        let Some(path) = self.tracker.touch_ended(id) else {
            debug!("Ignoring touch end for untracked pointer {}", id);
            return;
        };
        self.compositor.bake(&path, self.tracker.style());
    }
}
