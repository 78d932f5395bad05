//! Pointer gesture tracking.
//!
//! The window event handler feeds raw cursor/button events in; once per
//! frame the tracker is drained into a [`GestureFrame`] that screens
//! consume for swipes and drags. Clicks on widgets stay with egui; this
//! tracker only matters where the original design used a gesture detector
//! (the creation carousel, the drag-down tray).

/// Pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureFrame {
    /// Button currently held.
    pub pressed: bool,
    /// Button released during this frame.
    pub released: bool,
    /// Cursor position, if the cursor is inside the window.
    pub position: Option<(f32, f32)>,
    /// Cursor movement accumulated while held since the last frame.
    pub drag_delta: (f32, f32),
    /// Horizontal fling velocity in px/s, set on the release frame.
    pub fling_x: f32,
}

/// Accumulates winit pointer events between frames.
#[derive(Debug, Default)]
pub struct GestureTracker {
    pressed: bool,
    released: bool,
    position: Option<(f32, f32)>,
    drag_accum: (f32, f32),
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        if self.pressed {
            if let Some((px, py)) = self.position {
                self.drag_accum.0 += x - px;
                self.drag_accum.1 += y - py;
            }
        }
        self.position = Some((x, y));
    }

    pub fn on_button(&mut self, pressed: bool) {
        if self.pressed && !pressed {
            self.released = true;
        }
        self.pressed = pressed;
        log::trace!("pointer {}", if pressed { "down" } else { "up" });
    }

    pub fn on_cursor_left(&mut self) {
        self.position = None;
    }

    /// Drain the accumulated state into a frame snapshot. `dt` converts the
    /// release-frame drag distance into a fling velocity.
    pub fn take_frame(&mut self, dt: f32) -> GestureFrame {
        let drag_delta = std::mem::take(&mut self.drag_accum);
        let released = std::mem::take(&mut self.released);
        let fling_x = if released && dt > 0.0 {
            drag_delta.0 / dt
        } else {
            0.0
        };
        GestureFrame {
            pressed: self.pressed,
            released,
            position: self.position,
            drag_delta,
            fling_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_accumulates_only_while_pressed() {
        let mut tracker = GestureTracker::new();
        tracker.on_cursor_moved(10.0, 10.0);
        tracker.on_cursor_moved(20.0, 10.0);

        // Not pressed: no drag recorded.
        let frame = tracker.take_frame(1.0 / 60.0);
        assert_eq!(frame.drag_delta, (0.0, 0.0));

        tracker.on_button(true);
        tracker.on_cursor_moved(25.0, 12.0);
        tracker.on_cursor_moved(30.0, 15.0);

        let frame = tracker.take_frame(1.0 / 60.0);
        assert!(frame.pressed);
        assert_eq!(frame.drag_delta, (10.0, 5.0));

        // Drained: the next frame starts clean.
        let frame = tracker.take_frame(1.0 / 60.0);
        assert_eq!(frame.drag_delta, (0.0, 0.0));
    }

    #[test]
    fn test_release_produces_fling() {
        let mut tracker = GestureTracker::new();
        tracker.on_button(true);
        tracker.on_cursor_moved(0.0, 0.0);
        tracker.on_cursor_moved(30.0, 0.0);
        tracker.on_button(false);

        let frame = tracker.take_frame(0.1);
        assert!(frame.released);
        assert!(!frame.pressed);
        assert_eq!(frame.fling_x, 300.0);
    }

    #[test]
    fn test_cursor_left_clears_position() {
        let mut tracker = GestureTracker::new();
        tracker.on_cursor_moved(5.0, 5.0);
        tracker.on_cursor_left();
        let frame = tracker.take_frame(1.0 / 60.0);
        assert!(frame.position.is_none());
    }
}
