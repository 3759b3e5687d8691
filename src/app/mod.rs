pub mod app;
pub mod controls;
pub mod frame_clock;
pub mod frame_loop;
pub mod gl_window;
pub mod handler;

pub use handler::AppHandler;
