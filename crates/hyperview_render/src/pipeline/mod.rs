//! Rendering pipeline components
//!
//! CPU tessellation of recorded frames and the wgpu pipeline that
//! presents them.

pub mod types;
pub mod tessellate;
pub mod wireframe_pipeline;

pub use types::{SurfaceUniforms, Vertex2D};
pub use tessellate::{tessellate, CIRCLE_SEGMENTS, CIRCLE_VERTEX_COUNT, LINE_VERTEX_COUNT};
pub use wireframe_pipeline::WireframePipeline;
