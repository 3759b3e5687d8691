use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::input::KeyState;
use crate::renderer::camera::{Camera, CameraController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    pub exit: bool,
}

impl EventResponse {
    const CONTINUE: Self = Self { exit: false };
    const EXIT: Self = Self { exit: true };
}

/// Keyboard, mouse and focus routing for the fly camera.
pub struct SceneControls {
    keys: KeyState,
    camera_controller: CameraController,
    focused: bool,
}

impl SceneControls {
    pub fn new(camera: Camera) -> Self {
        Self {
            keys: KeyState::new(),
            camera_controller: CameraController::new(camera),
            focused: true,
        }
    }

    pub fn camera(&self) -> &Camera {
        self.camera_controller.camera()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => EventResponse::EXIT,
            WindowEvent::KeyboardInput { event, .. } => self.on_key(event.physical_key, event.state),
            WindowEvent::Focused(focused) => {
                self.on_focus(*focused);
                EventResponse::CONTINUE
            }
            _ => EventResponse::CONTINUE,
        }
    }

    pub fn on_key(&mut self, key: PhysicalKey, state: ElementState) -> EventResponse {
        self.keys.process_key(key, state);
        if self.keys.quit_requested() {
            EventResponse::EXIT
        } else {
            EventResponse::CONTINUE
        }
    }

    /// Held keys are dropped on focus loss; their release events go elsewhere.
    pub fn on_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.keys.release_all();
        }
    }

    /// Raw device motion also arrives while another window has focus.
    pub fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.focused {
            self.camera_controller.on_mouse_motion(delta);
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.camera_controller.update(self.keys.movement(), delta_time);
    }
}
