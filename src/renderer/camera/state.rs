use nalgebra_glm as glm;

/// Pitch is clamped to +/- this many degrees.
pub const PITCH_LIMIT: f32 = 89.0;
pub const FOV_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

pub fn world_up() -> glm::Vec3 {
    glm::vec3(0.0, 1.0, 0.0)
}

/// Movement directions held during a frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub ascend: bool,
    pub descend: bool,
}

/// Free-flying camera. Angles are in degrees.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: glm::Vec3,
    front: glm::Vec3,
    pub up: glm::Vec3,
    yaw: f32,
    pitch: f32,
    pub fov: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per mouse count.
    pub sensitivity: f32,
}

impl Camera {
    pub fn new(position: glm::Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: glm::vec3(0.0, 0.0, -1.0),
            up: world_up(),
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov: FOV_DEGREES,
            speed: 2.5,
            sensitivity: 0.1,
        };
        camera.update_front();
        camera
    }

    pub fn with_controls(mut self, speed: f32, sensitivity: f32) -> Self {
        self.speed = speed;
        self.sensitivity = sensitivity;
        self
    }

    pub fn front(&self) -> glm::Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit vector pointing to the camera's right.
    pub fn right(&self) -> glm::Vec3 {
        glm::normalize(&glm::cross(&self.front, &self.up))
    }

    /// Move along every held direction by `speed * delta_time`. Directions add
    /// up, so diagonal motion is faster than straight motion.
    pub fn process_movement(&mut self, keys: MovementKeys, delta_time: f32) {
        let step = self.speed * delta_time;
        let right = self.right();

        if keys.forward {
            self.position += self.front * step;
        }
        if keys.backward {
            self.position -= self.front * step;
        }
        if keys.left {
            self.position -= right * step;
        }
        if keys.right {
            self.position += right * step;
        }
        if keys.ascend {
            self.position += world_up() * step;
        }
        if keys.descend {
            self.position -= world_up() * step;
        }
    }

    /// Apply a relative mouse delta. Screen Y grows downward, so positive
    /// `dy` pitches the camera down.
    pub fn process_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    fn update_front(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = glm::vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = glm::normalize(&front);
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> glm::Mat4 {
        glm::perspective(aspect, self.fov.to_radians(), NEAR_PLANE, FAR_PLANE)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(glm::vec3(0.0, 0.5, 3.0), -90.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn forward_only() -> MovementKeys {
        MovementKeys {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(glm::distance(&camera.front(), &glm::vec3(0.0, 0.0, -1.0)) < EPS);
        assert_eq!(camera.position, glm::vec3(0.0, 0.5, 3.0));
        assert_eq!(camera.fov, 45.0);
    }

    #[test]
    fn displacement_is_linear_in_delta_time() {
        let all = MovementKeys {
            forward: true,
            right: true,
            ascend: true,
            ..Default::default()
        };
        for keys in [forward_only(), all] {
            let start = Camera::default();

            let mut single = start.clone();
            single.process_movement(keys, 0.1);
            let mut double = start.clone();
            double.process_movement(keys, 0.2);

            let d1 = single.position - start.position;
            let d2 = double.position - start.position;
            assert!(glm::distance(&(d1 * 2.0), &d2) < EPS);
        }
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.process_movement(
            MovementKeys {
                forward: true,
                backward: true,
                left: true,
                right: true,
                ascend: true,
                descend: true,
            },
            0.5,
        );
        assert!(glm::distance(&camera.position, &start) < EPS);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.process_movement(
            MovementKeys {
                forward: true,
                right: true,
                ..Default::default()
            },
            1.0,
        );
        let travelled = glm::distance(&camera.position, &start);
        assert!((travelled - 2.5 * 2.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn vertical_keys_use_world_up() {
        let mut camera = Camera::default();
        camera.process_mouse_delta(0.0, -300.0); // look up steeply
        let start = camera.position;
        camera.process_movement(
            MovementKeys {
                ascend: true,
                ..Default::default()
            },
            1.0,
        );
        assert!(glm::distance(&camera.position, &(start + glm::vec3(0.0, 2.5, 0.0))) < EPS);
    }

    #[test]
    fn holding_forward_for_one_second() {
        let mut camera = Camera::default();
        let start = camera.position;
        let front = camera.front();
        for _ in 0..60 {
            camera.process_movement(forward_only(), 1.0 / 60.0);
        }
        let moved = camera.position - start;
        assert!((glm::dot(&moved, &front) - 2.5).abs() < 1e-3);
        assert!(glm::length(&(moved - front * glm::dot(&moved, &front))) < 1e-4);
    }

    #[test]
    fn horizontal_mouse_delta_turns_yaw() {
        let mut camera = Camera::default();
        camera.process_mouse_delta(100.0, 0.0);
        assert!((camera.yaw() - (-80.0)).abs() < EPS);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.process_mouse_delta(3.0, -1_000.0);
            assert!(camera.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_mouse_delta(0.0, 1.0e7);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn front_stays_unit_length() {
        let mut camera = Camera::default();
        let deltas = [(13.0, 7.0), (-250.0, 40.0), (0.5, -900.0), (1234.0, 1234.0)];
        for (dx, dy) in deltas {
            camera.process_mouse_delta(dx, dy);
            let front = camera.front();
            assert!((glm::length(&front) - 1.0).abs() < EPS);
            assert!(glm::distance(&glm::normalize(&front), &front) < EPS);
        }
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let eye = view * glm::vec4(0.0, 0.5, 3.0, 1.0);
        assert!(glm::length(&eye.xyz()) < EPS);
    }
}
