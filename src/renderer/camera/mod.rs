pub mod controller;
pub mod state;

pub use controller::CameraController;
pub use state::{Camera, MovementKeys, world_up};
