use std::time::Instant;

use nalgebra_glm as glm;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;

use crate::app::controls::{EventResponse, SceneControls};
use crate::app::frame_clock::FrameClock;
use crate::app::gl_window::GlWindow;
use crate::error::SceneError;
use crate::renderer::Renderer;
use crate::renderer::camera::Camera;
use crate::renderer::frame::build_frame;
use crate::settings::Settings;
use crate::texture::TextureImage;

/// Per-window scene context: GL objects, camera and input state.
pub struct App {
    window: GlWindow,
    renderer: Renderer,
    controls: SceneControls,
    clock: FrameClock,
    projection: glm::Mat4,
}

impl App {
    pub fn new(
        event_loop: &ActiveEventLoop,
        settings: &Settings,
        texture: &TextureImage,
    ) -> Result<Self, SceneError> {
        let window = GlWindow::new(event_loop, &settings.window)?;
        window.init_gl_state();
        window.capture_cursor();

        let renderer = Renderer::new(&window.gl, texture)?;

        let camera = Camera::default().with_controls(
            settings.controls.move_speed,
            settings.controls.mouse_sensitivity,
        );
        // Fixed for the whole run, taken from the initial framebuffer.
        let projection = camera.projection_matrix(window.aspect_ratio());

        Ok(Self {
            window,
            renderer,
            controls: SceneControls::new(camera),
            clock: FrameClock::starting_at(Instant::now()),
            projection,
        })
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        if let WindowEvent::Resized(size) = event {
            self.window.resize(*size);
        }
        self.controls.handle_window_event(event)
    }

    pub fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        self.controls.on_mouse_motion(delta);
    }

    /// One iteration: timing, held-key movement, draw, present.
    pub fn frame(&mut self) -> Result<(), SceneError> {
        let delta_time = self.clock.tick();
        self.controls.update(delta_time);

        let plan = build_frame(self.controls.camera(), &self.projection);
        self.renderer.render(&self.window.gl, &plan);

        self.window.swap_buffers()
    }

    pub fn request_redraw(&self) {
        self.window.window.request_redraw();
    }

    /// Release GL objects while the context is still current.
    pub fn destroy(self) {
        self.renderer.destroy(&self.window.gl);
        log::info!("released GPU resources");
    }
}
