//! Pointer Input Handling
//!
//! This crate turns pointer drags over the drawing surface into rotation
//! of the tesseract in the XW and YW planes.

mod drag_controller;
mod pointer;

pub use drag_controller::{DragController, DragState, RotationControl, DEFAULT_DRAG_SENSITIVITY};
pub use pointer::{PointerEvent, PointerMapper};
