//! A small fixed OpenGL scene: a lit, textured ground plane with a row of
//! cubes, viewed through a free-flying mouse and keyboard camera.

pub mod app;
pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod texture;

pub const CONFY_APP_NAME: &str = "plane-with-cubes";
