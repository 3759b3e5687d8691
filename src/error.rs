use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read texture file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode texture: {0}")]
    Image(#[from] image::ImageError),

    #[error("texture has empty dimensions ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("window system error: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("failed to create GL context: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("failed to create GL object: {0}")]
    GlObject(String),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
