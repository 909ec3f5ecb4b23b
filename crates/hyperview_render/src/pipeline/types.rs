//! GPU data types for the wireframe pipeline
//!
//! All types are `#[repr(C)]` and implement `bytemuck::Pod` for direct upload.

use bytemuck::{Pod, Zeroable};

/// A tessellated vertex in surface pixel coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Pixel position (origin top-left, y down)
    pub position: [f32; 2],
    /// Straight-alpha RGBA
    pub color: [f32; 4],
}

/// Uniforms for pixel → clip space mapping
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SurfaceUniforms {
    /// Logical surface size in pixels
    pub surface_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl Default for SurfaceUniforms {
    fn default() -> Self {
        Self {
            surface_size: [540.0, 540.0],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_surface_uniforms_size() {
        // Uniform buffers are 16-byte aligned
        assert_eq!(size_of::<SurfaceUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
        assert_eq!(std::mem::align_of::<SurfaceUniforms>(), 4);
    }
}
