//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;
mod render;
mod view;
mod window;

pub use animation::{AnimationDriver, AnimationState, Tick, DEFAULT_SPEEDS, DEFAULT_STARTUP_DELAY};
pub use render::{RenderError, RenderSystem, SurfaceSlot};
pub use view::{TesseractView, DEFAULT_SURFACE_ID};
pub use window::{WindowError, WindowSystem};
