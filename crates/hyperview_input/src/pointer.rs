//! Pointer mapping from raw window events to surface-local pointer events
//!
//! Presses and moves count only over the drawing surface. A left-button
//! release is reported wherever the cursor is, so a drag that leaves the
//! surface still ends.

use hyperview_math::Vec2;
use winit::event::{ElementState, MouseButton};

/// Pointer events in surface-local logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the surface
    Pressed { at: Vec2 },
    /// Cursor moved over the surface
    Moved { at: Vec2 },
    /// Primary button released anywhere
    Released,
}

/// Tracks the cursor and maps window input to [`PointerEvent`]s
#[derive(Debug, Clone)]
pub struct PointerMapper {
    /// Surface origin within the window, logical pixels
    origin: Vec2,
    /// Surface size, logical pixels
    size: Vec2,
    /// Last cursor position in surface-local coordinates
    cursor: Option<Vec2>,
}

impl PointerMapper {
    /// Surface of `width` x `height` at the window origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
            cursor: None,
        }
    }

    /// Builder: place the surface at an offset inside the window
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Whether a surface-local point lies on the surface
    pub fn contains(&self, local: Vec2) -> bool {
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.size.x && local.y < self.size.y
    }

    /// Last known cursor position, surface-local
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Cursor moved to `window_pos` (logical window pixels)
    ///
    /// Returns `Some(Moved)` only while the cursor is over the surface
    pub fn map_cursor_moved(&mut self, window_pos: Vec2) -> Option<PointerEvent> {
        let local = window_pos - self.origin;
        self.cursor = Some(local);
        self.contains(local).then_some(PointerEvent::Moved { at: local })
    }

    /// Cursor left the window
    pub fn map_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Map a mouse button to a pointer event
    ///
    /// Left press over the surface starts a drag, left release anywhere ends it
    pub fn map_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => self
                .cursor
                .filter(|at| self.contains(*at))
                .map(|at| PointerEvent::Pressed { at }),
            ElementState::Released => Some(PointerEvent::Released),
        }
    }
}
