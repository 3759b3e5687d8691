//! Keyboard state for the fly camera.
//!
//! W/S move along the view direction, A/D strafe, Q/E move along world up,
//! Escape asks the frame loop to close.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::renderer::camera::MovementKeys;

/// Tracks which keys are currently held.
#[derive(Debug, Default)]
pub struct KeyState {
    movement: MovementKeys,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event and update the held set.
    pub fn process_key(&mut self, key: PhysicalKey, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        let PhysicalKey::Code(code) = key else {
            return;
        };

        match code {
            KeyCode::KeyW => self.movement.forward = pressed,
            KeyCode::KeyS => self.movement.backward = pressed,
            KeyCode::KeyA => self.movement.left = pressed,
            KeyCode::KeyD => self.movement.right = pressed,
            KeyCode::KeyQ => self.movement.ascend = pressed,
            KeyCode::KeyE => self.movement.descend = pressed,
            KeyCode::Escape => self.quit |= pressed,
            _ => {}
        }
    }

    pub fn movement(&self) -> MovementKeys {
        self.movement
    }

    /// Sticky once Escape has been pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Release all movement keys (e.g., on focus loss).
    pub fn release_all(&mut self) {
        self.movement = MovementKeys::default();
    }
}
