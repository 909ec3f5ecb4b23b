//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Wireframe pipeline
//! - Presenting recorded frames
//!
//! The system also acts as the [`SurfaceHost`] the view mounts on: it owns
//! exactly one drawing surface, registered under the configured id.

use std::sync::Arc;
use winit::window::Window;
use hyperview_render::{
    context::{ContextError, RenderContext},
    pipeline::WireframePipeline,
    DrawList, Rgba, SurfaceHost, SurfaceInfo,
};
use crate::config::SurfaceConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU initialization failed
    Init(ContextError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(e) => write!(f, "GPU initialization failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Init(e)
    }
}

/// A single named drawing surface in logical pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSlot {
    id: String,
    info: SurfaceInfo,
}

impl SurfaceSlot {
    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self {
            id: config.id.clone(),
            info: SurfaceInfo {
                width: config.width as f64,
                height: config.height as f64,
            },
        }
    }
}

impl SurfaceHost for SurfaceSlot {
    fn lookup_surface(&self, id: &str) -> Option<SurfaceInfo> {
        (self.id == id).then_some(self.info)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WireframePipeline,
    slot: SurfaceSlot,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        surface: &SurfaceConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = WireframePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            slot: SurfaceSlot::from_config(surface),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size after a loss
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Present a recorded frame
    pub fn render_frame(&mut self, frame: &DrawList, background: Rgba) -> Result<(), RenderError> {
        self.pipeline
            .upload(&self.context.device, &self.context.queue, frame, background);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl SurfaceHost for RenderSystem {
    fn lookup_surface(&self, id: &str) -> Option<SurfaceInfo> {
        self.slot.lookup_surface(id)
    }
}
