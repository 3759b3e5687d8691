use std::process::ExitCode;

use winit::event_loop::{ControlFlow, EventLoop};

use plane_with_cubes::app::AppHandler;
use plane_with_cubes::error::SceneError;
use plane_with_cubes::settings::Settings;
use plane_with_cubes::texture::load_texture;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SceneError> {
    let settings = Settings::load();
    log::info!("settings: {settings:?}");

    // Decode before any window exists so a bad texture never enters the loop.
    let texture = load_texture(&settings.scene.texture_path)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler::new(settings, texture);
    event_loop.run_app(&mut handler)?;

    handler.finish()
}
