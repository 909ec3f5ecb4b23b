//! Render pipeline for presenting a recorded wireframe frame
//!
//! The [`DrawList`] is tessellated on the CPU each frame and streamed into
//! a growable vertex buffer; a single alpha-blended draw presents it.

use wgpu::util::DeviceExt;

use super::tessellate::tessellate;
use super::types::{SurfaceUniforms, Vertex2D};
use crate::canvas::{Canvas2D, Rgba};
use crate::draw_list::DrawList;

/// Initial vertex buffer capacity; one tesseract frame needs well under this
const INITIAL_VERTEX_CAPACITY: usize = 4096;

/// Render pipeline for 2D wireframe display
pub struct WireframePipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
    clear_color: wgpu::Color,
    /// Reused tessellation scratch space
    scratch: Vec<Vertex2D>,
}

impl WireframePipeline {
    /// Create a new wireframe pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wireframe Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wireframe Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/wireframe.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wireframe Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Wireframe Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Quads and fans are emitted with mixed winding
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wireframe Uniform Buffer"),
            contents: bytemuck::bytes_of(&SurfaceUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wireframe Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = Self::create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY);

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
            clear_color: wgpu::Color::BLACK,
            scratch: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
        }
    }

    /// Get the vertex buffer layout for Vertex2D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Wireframe Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex2D>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Tessellate a frame and upload it for the next [`render`](Self::render)
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &DrawList,
        background: Rgba,
    ) {
        tessellate(frame, background, &mut self.scratch);

        if self.scratch.len() > self.vertex_capacity {
            let capacity = self.scratch.len().next_power_of_two();
            log::debug!("Growing wireframe vertex buffer to {} vertices", capacity);
            self.vertex_buffer = Self::create_vertex_buffer(device, capacity);
            self.vertex_capacity = capacity;
        }

        if !self.scratch.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
        self.vertex_count = self.scratch.len() as u32;

        let size = frame.size();
        let uniforms = SurfaceUniforms {
            surface_size: [size.x as f32, size.y as f32],
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        self.clear_color = wgpu::Color {
            r: background.r as f64,
            g: background.g as f64,
            b: background.b as f64,
            a: background.a as f64,
        };
    }

    /// Number of vertices in the last upload
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Record the wireframe render pass
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wireframe Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.vertex_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = WireframePipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex2D>() as u64);
    }

    #[test]
    fn test_color_attribute_follows_position() {
        let layout = WireframePipeline::vertex_buffer_layout();
        assert_eq!(layout.attributes[1].offset, std::mem::size_of::<[f32; 2]>() as u64);
    }
}
