use super::{Camera, MovementKeys};

/// Feeds window input into the camera.
pub struct CameraController {
    camera: Camera,
    first_sample: bool,
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            first_sample: true,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Handle a raw pointer delta. The first sample is dropped so the camera
    /// does not jump when the cursor is captured.
    pub fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.first_sample {
            self.first_sample = false;
            return;
        }
        self.camera.process_mouse_delta(delta.0 as f32, delta.1 as f32);
    }

    pub fn update(&mut self, keys: MovementKeys, delta_time: f32) {
        self.camera.process_movement(keys, delta_time);
    }
}
