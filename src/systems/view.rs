//! Tesseract view lifecycle
//!
//! [`TesseractView`] is the single owner of the mutable view state: the
//! rotation angles, the drag controller and the animation driver. The host
//! calls `mount` when the view becomes visible, `tick` once per display
//! frame, `handle_pointer` for pointer input and `unmount` when the view is
//! torn down. Every mutation happens before the render that reads it since
//! all of these run on the host's event thread.

use std::time::{Duration, Instant};

use hyperview_input::{DragController, PointerEvent};
use hyperview_math::{Hypercube, ProjectionConfig, Projector, RotationAngles, Vec2, VERTEX_COUNT};
use hyperview_render::{DrawList, FrameRenderer, SurfaceHost, SurfaceInfo, WireframeStyle};

use super::animation::AnimationDriver;

/// Default surface identifier
pub const DEFAULT_SURFACE_ID: &str = "tesseract";

/// The rotating, drag-steerable tesseract
pub struct TesseractView {
    surface_id: String,
    hypercube: &'static Hypercube,
    angles: RotationAngles,
    projector: Projector,
    renderer: FrameRenderer,
    driver: AnimationDriver,
    drag: DragController,
    surface: Option<SurfaceInfo>,
    frame: DrawList,
    points: [Vec2; VERTEX_COUNT],
}

impl Default for TesseractView {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_ID)
    }
}

impl TesseractView {
    /// Create an unmounted view that will look up `surface_id` on mount
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
            hypercube: Hypercube::shared(),
            angles: RotationAngles::ZERO,
            projector: Projector::new(ProjectionConfig::default(), 0.0, 0.0),
            renderer: FrameRenderer::default(),
            driver: AnimationDriver::new(),
            drag: DragController::new(),
            surface: None,
            frame: DrawList::new(0.0, 0.0),
            points: [Vec2::ZERO; VERTEX_COUNT],
        }
    }

    /// Attach to the host's surface and start animating
    ///
    /// A host without the surface is a silent no-op and returns `false`.
    /// Mounting an already mounted view keeps the running loop.
    pub fn mount<H: SurfaceHost + ?Sized>(&mut self, host: &H, now: Instant) -> bool {
        let Some(surface) = host.lookup_surface(&self.surface_id) else {
            log::debug!("Surface '{}' not present, skipping mount", self.surface_id);
            return false;
        };

        if self.surface != Some(surface) {
            self.projector.resize(surface.width, surface.height);
            self.frame.resize(surface.width, surface.height);
        }
        self.surface = Some(surface);

        if self.driver.start(now) {
            log::info!(
                "Mounted tesseract view on '{}' ({}x{})",
                self.surface_id, surface.width, surface.height
            );
        }
        true
    }

    /// Stop animating, drop any drag and the last frame, then detach
    pub fn unmount(&mut self) {
        if self.surface.take().is_some() {
            self.driver.stop();
            self.drag.release();
            self.frame.reset();
            log::info!("Unmounted tesseract view from '{}'", self.surface_id);
        }
    }

    /// Advance one display frame; returns `true` if a new frame was drawn
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.surface.is_none() {
            return false;
        }
        let tick = self.driver.tick(now, &mut self.angles);
        if tick.needs_render() {
            self.render();
            true
        } else {
            false
        }
    }

    /// Route a pointer event; returns `true` if a new frame was drawn
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.surface.is_none() {
            return false;
        }
        match event {
            PointerEvent::Pressed { at } => {
                self.drag.press(at);
                false
            }
            PointerEvent::Moved { at } => {
                if self.drag.move_to(at, &mut self.angles) {
                    self.render();
                    true
                } else {
                    false
                }
            }
            PointerEvent::Released => {
                self.drag.release();
                false
            }
        }
    }

    /// Redraw the frame from the current angles
    fn render(&mut self) {
        self.points =
            self.renderer
                .render_frame(self.hypercube, &self.angles, &self.projector, &mut self.frame);
    }

    /// Most recently drawn frame
    #[inline]
    pub fn frame(&self) -> &DrawList {
        &self.frame
    }

    /// Projected vertex positions of the most recent frame
    #[inline]
    pub fn points(&self) -> &[Vec2; VERTEX_COUNT] {
        &self.points
    }

    #[inline]
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    #[inline]
    pub fn style(&self) -> &WireframeStyle {
        self.renderer.style()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Builder: projection constants
    pub fn with_projection(mut self, config: ProjectionConfig) -> Self {
        let center = self.projector.center();
        self.projector = Projector::new(config, center.x * 2.0, center.y * 2.0);
        self
    }

    /// Builder: wireframe style
    pub fn with_style(mut self, style: WireframeStyle) -> Self {
        self.renderer = FrameRenderer::new(style);
        self
    }

    /// Builder: per-frame rotation speeds
    pub fn with_speeds(mut self, speeds: RotationAngles) -> Self {
        self.driver.speeds = speeds;
        self
    }

    /// Builder: delay between mount and first frame
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.driver.startup_delay = delay;
        self
    }

    /// Builder: drag sensitivity in radians per pixel
    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag.sensitivity = sensitivity;
        self
    }

    /// Builder: starting angles
    pub fn with_initial_angles(mut self, angles: RotationAngles) -> Self {
        self.angles = angles;
        self
    }
}
