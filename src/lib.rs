//! Hyperview - Interactive Tesseract
//!
//! A rotating 4D hypercube projected to a 2D wireframe, steerable by
//! dragging with the pointer.

pub mod config;
pub mod systems;
