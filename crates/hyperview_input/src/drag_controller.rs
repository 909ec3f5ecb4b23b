//! Pointer-drag steering of the w-plane rotation
//!
//! Controls:
//! - Press over the surface: start dragging
//! - Vertical drag: XW rotation
//! - Horizontal drag: YW rotation
//! - Release anywhere: stop; no momentum is carried over

use hyperview_math::{RotationAngles, Vec2};

/// Default radians of rotation per pixel of drag
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.012;

/// Drag state, only `Dragging` carries a pointer position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Released,
    /// Button held; `last` is the previous pointer position in surface-local pixels
    Dragging { last: Vec2 },
}

/// Turns pointer drag deltas into rotation deltas
#[derive(Clone, Debug)]
pub struct DragController {
    state: DragState,
    /// Radians per pixel of drag
    pub sensitivity: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Released,
            sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed over the surface at `at`
    pub fn press(&mut self, at: Vec2) {
        if !self.is_dragging() {
            log::debug!("Drag started at ({:.1}, {:.1})", at.x, at.y);
        }
        self.state = DragState::Dragging { last: at };
    }

    /// Pointer moved to `at`
    ///
    /// While dragging, vertical movement feeds XW and horizontal movement
    /// feeds YW. Returns `true` when the rotation changed and the frame
    /// should be redrawn.
    pub fn move_to<C: RotationControl>(&mut self, at: Vec2, target: &mut C) -> bool {
        let DragState::Dragging { last } = self.state else {
            return false;
        };

        let delta = at - last;
        target.rotate_xw(delta.y * self.sensitivity);
        target.rotate_yw(delta.x * self.sensitivity);
        self.state = DragState::Dragging { last: at };
        true
    }

    /// Pointer released, anywhere
    pub fn release(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag released");
        }
        self.state = DragState::Released;
    }

    /// Builder: set drag sensitivity
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}

/// Trait for rotation control
/// Allows the controller to steer any rotation state
pub trait RotationControl {
    fn rotate_xw(&mut self, delta: f64);
    fn rotate_yw(&mut self, delta: f64);
}

impl RotationControl for RotationAngles {
    fn rotate_xw(&mut self, delta: f64) {
        self.xw += delta;
    }

    fn rotate_yw(&mut self, delta: f64) {
        self.yw += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_drag_feeds_yw_only() {
        let mut angles = RotationAngles::ZERO;
        let mut drag = DragController::new();
        let k = drag.sensitivity;

        drag.press(Vec2::new(100.0, 100.0));
        assert!(drag.move_to(Vec2::new(110.0, 100.0), &mut angles));

        assert_eq!(angles.yw, 10.0 * k);
        assert_eq!(angles.xw, 0.0);
        assert_eq!(angles.zw, 0.0);
    }

    #[test]
    fn test_vertical_drag_feeds_xw() {
        let mut angles = RotationAngles::ZERO;
        let mut drag = DragController::new().with_sensitivity(0.5);

        drag.press(Vec2::new(0.0, 0.0));
        drag.move_to(Vec2::new(0.0, -4.0), &mut angles);

        assert_eq!(angles.xw, -2.0);
        assert_eq!(angles.yw, 0.0);
    }

    #[test]
    fn test_deltas_are_relative_to_last_move() {
        let mut angles = RotationAngles::ZERO;
        let mut drag = DragController::new().with_sensitivity(1.0);

        drag.press(Vec2::new(0.0, 0.0));
        drag.move_to(Vec2::new(3.0, 0.0), &mut angles);
        drag.move_to(Vec2::new(5.0, 0.0), &mut angles);

        assert_eq!(angles.yw, 5.0);
        assert_eq!(drag.state(), DragState::Dragging { last: Vec2::new(5.0, 0.0) });
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut angles = RotationAngles::ZERO;
        let mut drag = DragController::new();

        assert!(!drag.move_to(Vec2::new(50.0, 50.0), &mut angles));
        assert_eq!(angles, RotationAngles::ZERO);
    }

    #[test]
    fn test_release_stops_rotation_immediately() {
        let mut angles = RotationAngles::ZERO;
        let mut drag = DragController::new();

        drag.press(Vec2::new(0.0, 0.0));
        drag.move_to(Vec2::new(1.0, 1.0), &mut angles);
        drag.release();
        let after_release = angles;

        assert!(!drag.is_dragging());
        assert!(!drag.move_to(Vec2::new(40.0, 40.0), &mut angles));
        assert_eq!(angles, after_release);
    }

    #[test]
    fn test_release_when_not_dragging_is_harmless() {
        let mut drag = DragController::new();
        drag.release();
        assert_eq!(drag.state(), DragState::Released);
    }
}
