//! Immediate-mode 2D drawing surface
//!
//! The frame renderer only talks to a [`Canvas2D`]; the recorded
//! [`crate::DrawList`] and the GPU backend sit behind it.

use hyperview_math::Vec2;

/// Straight-alpha RGBA color, components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray of the given level
    #[inline]
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Build from an `[r, g, b, a]` array
    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Line stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    /// Line width in pixels
    pub width: f64,
}

/// Shape fill style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Rgba,
}

/// A 2D vector drawing surface in pixel coordinates (origin top-left, y down)
pub trait Canvas2D {
    /// Surface size in pixels
    fn size(&self) -> Vec2;
    /// Erase a rectangular region
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    /// Stroke a single line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &StrokeStyle);
    /// Fill a full circle
    fn fill_circle(&mut self, center: Vec2, radius: f64, style: &FillStyle);

    /// Erase the whole surface
    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(Vec2::ZERO, size);
    }
}

/// Pixel dimensions of a mounted drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceInfo {
    pub width: f64,
    pub height: f64,
}

/// Provides drawing surfaces by stable identifier
///
/// A host that has no surface under the requested id returns `None`; the
/// caller treats that as "nothing to mount", not as an error.
pub trait SurfaceHost {
    fn lookup_surface(&self, id: &str) -> Option<SurfaceInfo>;
}
