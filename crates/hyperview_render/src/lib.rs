//! Tesseract Wireframe Rendering
//!
//! This crate draws the projected tesseract onto an immediate-mode 2D
//! surface and presents recorded frames with wgpu.
//!
//! ## Key Components
//!
//! - [`Canvas2D`] - the drawing surface the frame renderer talks to
//! - [`DrawList`] - a canvas that records draw calls in order
//! - [`FrameRenderer`] - rotates, projects and draws one wireframe frame
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WireframePipeline`] - tessellates and presents a [`DrawList`]

pub mod canvas;
pub mod draw_list;
pub mod frame;
pub mod context;
pub mod pipeline;

pub use canvas::{Canvas2D, FillStyle, Rgba, StrokeStyle, SurfaceHost, SurfaceInfo};
pub use draw_list::{DrawCommand, DrawList};
pub use frame::{project_vertices, FrameRenderer, WireframeStyle};
