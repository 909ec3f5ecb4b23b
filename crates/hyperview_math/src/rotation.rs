//! Composed rotations in the three w-planes
//!
//! In 4D, rotations happen in planes rather than around axes. The view only
//! uses the three planes that mix a spatial axis with w: XW, YW and ZW.
//! They are applied as successive Givens rotations, XW first, then YW on the
//! new w, then ZW on the next new w. The composition does not commute, so the
//! order is part of the result.

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The rotation planes that involve the w axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Planes in the order they are applied by [`rotate`]
    pub const APPLY_ORDER: [RotationPlane; 3] = [Self::XW, Self::YW, Self::ZW];
}

/// Cumulative rotation angle (radians) in each w-plane
///
/// Angles are unbounded; no wraparound is applied since the trigonometric
/// functions are periodic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    pub xw: f64,
    pub yw: f64,
    pub zw: f64,
}

impl RotationAngles {
    /// No rotation
    pub const ZERO: Self = Self { xw: 0.0, yw: 0.0, zw: 0.0 };

    #[inline]
    pub const fn new(xw: f64, yw: f64, zw: f64) -> Self {
        Self { xw, yw, zw }
    }

    /// Angle for a single plane
    #[inline]
    pub fn get(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// Add `delta` radians to one plane
    #[inline]
    pub fn add(&mut self, plane: RotationPlane, delta: f64) {
        match plane {
            RotationPlane::XW => self.xw += delta,
            RotationPlane::YW => self.yw += delta,
            RotationPlane::ZW => self.zw += delta,
        }
    }

    /// Add a per-plane step to every angle
    #[inline]
    pub fn advance(&mut self, step: &RotationAngles) {
        self.xw += step.xw;
        self.yw += step.yw;
        self.zw += step.zw;
    }

    /// Rotate a point by these angles, see [`rotate`]
    #[inline]
    pub fn rotate(&self, point: Vec4) -> Vec4 {
        rotate(point, self)
    }
}

/// Rotate `v` by `angle` in a single plane
///
/// For plane AW: `a' = a·cos − w·sin`, `w' = a·sin + w·cos`.
#[inline]
pub fn rotate_in_plane(v: Vec4, plane: RotationPlane, angle: f64) -> Vec4 {
    let (sin, cos) = angle.sin_cos();
    let Vec4 { x, y, z, w } = v;
    match plane {
        RotationPlane::XW => Vec4::new(x * cos - w * sin, y, z, x * sin + w * cos),
        RotationPlane::YW => Vec4::new(x, y * cos - w * sin, z, y * sin + w * cos),
        RotationPlane::ZW => Vec4::new(x, y, z * cos - w * sin, z * sin + w * cos),
    }
}

/// Apply the composed XW → YW → ZW rotation to a point
pub fn rotate(point: Vec4, angles: &RotationAngles) -> Vec4 {
    RotationPlane::APPLY_ORDER
        .iter()
        .fold(point, |v, &plane| rotate_in_plane(v, plane, angles.get(plane)))
}
