//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use hyperview_math::{ProjectionConfig, RotationAngles};
use hyperview_render::{FillStyle, Rgba, StrokeStyle, WireframeStyle};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Drawing surface configuration
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Projection constants
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Wireframe style
    #[serde(default)]
    pub style: StyleConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HV_SURFACE__WIDTH=600 -> surface.width = 600
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview - Tesseract".to_string(),
            resizable: false,
            vsync: true,
        }
    }
}

/// Drawing surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Identifier the view mounts on
    pub id: String,
    /// Surface width in logical pixels
    pub width: u32,
    /// Surface height in logical pixels
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            id: crate::systems::DEFAULT_SURFACE_ID.to_string(),
            width: 540,
            height: 540,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between mount and first frame, milliseconds
    pub startup_delay_ms: u64,
    /// Per-frame rotation step in radians
    pub speeds: RotationAngles,
    /// Angles at mount
    pub initial_angles: RotationAngles,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            startup_delay_ms: 140,
            speeds: crate::systems::DEFAULT_SPEEDS,
            initial_angles: RotationAngles::ZERO,
        }
    }
}

impl AnimationConfig {
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Radians of rotation per pixel of drag
    pub drag_sensitivity: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: hyperview_input::DEFAULT_DRAG_SENSITIVITY,
        }
    }
}

/// Wireframe style configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Outer edge color [r, g, b, a]
    pub outer_edge_color: [f32; 4],
    /// Inner edge color [r, g, b, a]
    pub inner_edge_color: [f32; 4],
    /// Outer edge width in pixels
    pub outer_edge_width: f64,
    /// Inner edge width in pixels
    pub inner_edge_width: f64,
    /// Outer vertex color [r, g, b, a]
    pub outer_vertex_color: [f32; 4],
    /// Inner vertex color [r, g, b, a]
    pub inner_vertex_color: [f32; 4],
    /// Vertex point radius in pixels
    pub vertex_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = WireframeStyle::default();
        Self {
            background_color: style.background.to_array(),
            outer_edge_color: style.outer_edge.color.to_array(),
            inner_edge_color: style.inner_edge.color.to_array(),
            outer_edge_width: style.outer_edge.width,
            inner_edge_width: style.inner_edge.width,
            outer_vertex_color: style.outer_vertex.color.to_array(),
            inner_vertex_color: style.inner_vertex.color.to_array(),
            vertex_radius: style.vertex_radius,
        }
    }
}

impl StyleConfig {
    /// Convert to the renderer's style
    pub fn to_style(&self) -> WireframeStyle {
        WireframeStyle {
            background: Rgba::from_array(self.background_color),
            outer_edge: StrokeStyle {
                color: Rgba::from_array(self.outer_edge_color),
                width: self.outer_edge_width,
            },
            inner_edge: StrokeStyle {
                color: Rgba::from_array(self.inner_edge_color),
                width: self.inner_edge_width,
            },
            outer_vertex: FillStyle {
                color: Rgba::from_array(self.outer_vertex_color),
            },
            inner_vertex: FillStyle {
                color: Rgba::from_array(self.inner_vertex_color),
            },
            vertex_radius: self.vertex_radius,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.surface.width, 540);
        assert_eq!(config.surface.height, 540);
        assert_eq!(config.surface.id, "tesseract");
        assert_eq!(config.input.drag_sensitivity, 0.012);
        assert_eq!(config.animation.startup_delay(), Duration::from_millis(140));
    }

    #[test]
    fn test_style_roundtrips_through_config() {
        let style = StyleConfig::default().to_style();
        assert_eq!(style, WireframeStyle::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("camera_distance_4d"));
        assert!(toml.contains("[animation.speeds]"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[projection]\nscale = 200.0\n"))
            .extract()
            .unwrap();
        assert_eq!(config.projection.scale, 200.0);
        assert_eq!(config.projection.camera_distance_4d, 3.0);
        assert_eq!(config.surface.width, 540);
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.title, WindowConfig::default().title);
    }
}
