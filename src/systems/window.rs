//! Window management system
//!
//! Creates a window whose client area is the drawing surface and converts
//! physical cursor coordinates into surface pixels. The surface keeps its
//! configured size and is stretched over the whole client area, so a
//! resized window scales cursor positions by `surface / window`.

use std::sync::Arc;
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::Window,
};
use hyperview_math::Vec2;
use crate::config::{SurfaceConfig, WindowConfig};

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    /// Drawing surface size in surface pixels
    surface: Vec2,
}

impl WindowSystem {
    /// Create window from config, sized to the drawing surface
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        surface: &SurfaceConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(surface.width, surface.height))
            .with_resizable(config.resizable);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window '{}' ({}x{} logical)",
            config.title, surface.width, surface.height
        );

        Ok(Self {
            window,
            surface: Vec2::new(surface.width as f64, surface.height as f64),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Convert a physical cursor position to surface pixels
    pub fn to_surface(&self, position: PhysicalPosition<f64>) -> Vec2 {
        physical_to_surface(position, self.window.inner_size(), self.surface)
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn physical_to_surface(
    position: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    surface: Vec2,
) -> Vec2 {
    let sx = surface.x / window.width.max(1) as f64;
    let sy = surface.y / window.height.max(1) as f64;
    Vec2::new(position.x * sx, position.y * sy)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Vec2 = Vec2 { x: 540.0, y: 540.0 };

    #[test]
    fn test_hidpi_window_maps_to_surface() {
        // 540x540 logical at scale factor 2
        let p = physical_to_surface(
            PhysicalPosition::new(200.0, 100.0),
            PhysicalSize::new(1080, 1080),
            SURFACE,
        );
        assert_eq!(p, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_unit_scale_is_identity() {
        let p = physical_to_surface(
            PhysicalPosition::new(13.0, 7.0),
            PhysicalSize::new(540, 540),
            SURFACE,
        );
        assert_eq!(p, Vec2::new(13.0, 7.0));
    }

    #[test]
    fn test_stretched_window_scales_back() {
        // Window resized to 1080x810 physical at scale factor 1
        let p = physical_to_surface(
            PhysicalPosition::new(1000.0, 800.0),
            PhysicalSize::new(1080, 810),
            SURFACE,
        );
        assert!((p.x - 500.0).abs() < 1e-9);
        assert!((p.y - 800.0 * 540.0 / 810.0).abs() < 1e-9);
        assert!(p.x < SURFACE.x && p.y < SURFACE.y);
    }

    #[test]
    fn test_zero_sized_window_stays_finite() {
        let p = physical_to_surface(PhysicalPosition::new(3.0, 4.0), PhysicalSize::new(0, 0), SURFACE);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
