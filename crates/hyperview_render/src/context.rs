//! WGPU device, queue and surface management

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};

/// Errors while bringing up the GPU
#[derive(Debug)]
pub enum ContextError {
    /// The window could not back a surface
    Surface(String),
    /// No adapter can present to the surface
    NoAdapter,
    /// Device request failed
    Device(String),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::Surface(msg) => write!(f, "Surface creation failed: {}", msg),
            ContextError::NoAdapter => write!(f, "No compatible GPU adapter"),
            ContextError::Device(msg) => write!(f, "Device request failed: {}", msg),
        }
    }
}

impl std::error::Error for ContextError {}

/// GPU state tied to one window surface
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context presenting to `window`
    ///
    /// With `vsync` the surface uses FIFO presentation, which paces the
    /// redraw loop at the display refresh rate.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| ContextError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Hyperview Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| ContextError::Device(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let (format, alpha_mode) = pick_surface_modes(&surface_caps)?;

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new window size
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

/// Prefer an sRGB format; fail instead of indexing empty capability lists
fn pick_surface_modes(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), ContextError> {
    let format = caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or_else(|| ContextError::Surface("adapter reports no surface formats".to_string()))?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or_else(|| ContextError::Surface("adapter reports no alpha modes".to_string()))?;
    Ok((format, alpha_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(
        formats: Vec<wgpu::TextureFormat>,
        alpha_modes: Vec<wgpu::CompositeAlphaMode>,
    ) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            alpha_modes,
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_srgb_format() {
        let caps = caps(
            vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
            vec![wgpu::CompositeAlphaMode::Opaque],
        );
        let (format, alpha) = pick_surface_modes(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(alpha, wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn test_falls_back_to_first_format() {
        let caps = caps(
            vec![wgpu::TextureFormat::Rgba8Unorm],
            vec![wgpu::CompositeAlphaMode::Auto],
        );
        let (format, _) = pick_surface_modes(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Rgba8Unorm);
    }

    #[test]
    fn test_empty_formats_is_an_error() {
        let caps = caps(vec![], vec![wgpu::CompositeAlphaMode::Opaque]);
        assert!(matches!(pick_surface_modes(&caps), Err(ContextError::Surface(_))));
    }

    #[test]
    fn test_empty_alpha_modes_is_an_error() {
        let caps = caps(vec![wgpu::TextureFormat::Bgra8UnormSrgb], vec![]);
        assert!(matches!(pick_surface_modes(&caps), Err(ContextError::Surface(_))));
    }
}
