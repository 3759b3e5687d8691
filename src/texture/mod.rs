pub mod loader;

pub use loader::{TextureImage, load_texture};
