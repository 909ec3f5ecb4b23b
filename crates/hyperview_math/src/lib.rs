//! 4D Mathematics Library
//!
//! Geometry, rotation and projection for the hyperview tesseract.
//!
//! ## Core Types
//!
//! - [`Vec4`], [`Vec3`], [`Vec2`] - points along the 4D → 3D → 2D pipeline
//! - [`RotationAngles`] - cumulative rotation in the XW, YW and ZW planes
//! - [`Projector`] - two-stage perspective projection onto a pixel surface
//! - [`Hypercube`] - the 16 vertices and 32 edges of the tesseract

mod vec4;
pub mod rotation;
pub mod projection;
pub mod hypercube;

pub use vec4::{Vec2, Vec3, Vec4};
pub use rotation::{rotate, rotate_in_plane, RotationAngles, RotationPlane};
pub use projection::{guard_denominator, ProjectionConfig, Projector, MAX_OFFSET_FACTOR};
pub use hypercube::{
    build_hypercube, is_outer_vertex, Edge, EdgeClass, Hypercube,
    EDGE_COUNT, VERTEX_COUNT, VERTEX_DEGREE,
};
