use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::app::app::App;
use crate::app::frame_loop::FrameLoop;
use crate::error::SceneError;
use crate::settings::Settings;
use crate::texture::TextureImage;

/// Drives the frame loop. Once closing, the event loop exits and the app's
/// GPU resources are released in `exiting`.
pub struct AppHandler {
    settings: Settings,
    texture: Option<TextureImage>,
    frame_loop: FrameLoop<App>,
    error: Option<SceneError>,
}

impl AppHandler {
    pub fn new(settings: Settings, texture: TextureImage) -> Self {
        Self {
            settings,
            texture: Some(texture),
            frame_loop: FrameLoop::default(),
            error: None,
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.close() {
            log::info!("closing");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SceneError) {
        log::error!("{error}");
        self.error.get_or_insert(error);
        self.close(event_loop);
    }

    /// Consume the handler after the event loop returns.
    pub fn finish(self) -> Result<(), SceneError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_loop.awaiting_app() {
            return;
        }
        let Some(texture) = self.texture.take() else {
            return;
        };

        match App::new(event_loop, &self.settings, &texture) {
            Ok(app) => {
                app.request_redraw();
                self.frame_loop.attach(app);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = self.frame_loop.running_app() else {
            return;
        };

        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = app.frame() {
                self.fail(event_loop, e);
            }
            return;
        }

        let response = app.handle_event(&event);
        if response.exit {
            self.close(event_loop);
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if let Some(app) = self.frame_loop.running_app() {
                app.on_mouse_motion(delta);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = self.frame_loop.running_app() {
            app.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = self.frame_loop.release() {
            app.destroy();
        }
    }
}
