//! Recording canvas
//!
//! [`DrawList`] keeps every drawing call in issue order. It is the ordered
//! frame output consumed by the GPU backend and inspected by tests.

use hyperview_math::Vec2;

use crate::canvas::{Canvas2D, FillStyle, Rgba, StrokeStyle};

/// A single recorded drawing call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { origin: Vec2, size: Vec2 },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f64 },
    Circle { center: Vec2, radius: f64, color: Rgba },
}

/// Canvas that records draw calls instead of rasterizing them
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Empty list for a `width` x `height` surface
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands in issue order
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Change the surface size; recorded commands are dropped
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Vec2::new(width, height);
        self.reset();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas2D for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        // A full clear hides everything before it
        if origin == Vec2::ZERO && size.x >= self.size.x && size.y >= self.size.y {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { origin, size });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: style.color,
            width: style.width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, style: &FillStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: style.color,
        });
    }
}
