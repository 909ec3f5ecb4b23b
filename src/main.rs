//! Hyperview - Interactive Tesseract
//!
//! Opens a window showing a continuously rotating tesseract wireframe.
//! Dragging with the left mouse button steers the rotation.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::systems::{RenderError, RenderSystem, TesseractView, WindowSystem};
use hyperview_input::PointerMapper;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    view: TesseractView,
    pointer: PointerMapper,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let view = build_view(&config);
        let pointer = PointerMapper::new(config.surface.width as f64, config.surface.height as f64);

        Self {
            config,
            window: None,
            render: None,
            view,
            pointer,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.view.unmount();
        event_loop.exit();
    }
}

/// Build the view from configuration
fn build_view(config: &AppConfig) -> TesseractView {
    TesseractView::new(config.surface.id.clone())
        .with_projection(config.projection)
        .with_style(config.style.to_style())
        .with_speeds(config.animation.speeds)
        .with_startup_delay(config.animation.startup_delay())
        .with_drag_sensitivity(config.input.drag_sensitivity)
        .with_initial_angles(config.animation.initial_angles)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window, &self.config.surface) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.surface,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.view.mount(&render, Instant::now());
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.shutdown(event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let Some(window) = &self.window else { return };
                let at = window.to_surface(position);
                if let Some(pointer) = self.pointer.map_cursor_moved(at) {
                    if self.view.handle_pointer(pointer) {
                        self.request_redraw();
                    }
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.map_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(pointer) = self.pointer.map_mouse_button(button, state) {
                    self.view.handle_pointer(pointer);
                }
            }

            WindowEvent::RedrawRequested => {
                self.view.tick(Instant::now());

                if let Some(render) = &mut self.render {
                    let background = self.view.style().background;
                    match render.render_frame(self.view.frame(), background) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => render.reconfigure(),
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            self.shutdown(event_loop);
                            return;
                        }
                        Err(e) => log::warn!("{}", e),
                    }
                }

                // Request next frame
                if self.view.is_mounted() {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hyperview");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
