pub mod camera;
pub mod frame;
pub mod geometry;
pub mod mesh;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use renderer::Renderer;
