use std::num::NonZeroU32;

use glow::HasContext;
use glutin::{
    config::{ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext,
        PossiblyCurrentContext, Version,
    },
    display::{Display, DisplayApiPreference, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Window},
};

use crate::error::SceneError;
use crate::settings::WindowSettings;

/// A winit window with a current GL 3.3 core context.
pub struct GlWindow {
    pub window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    pub gl: glow::Context,
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self, SceneError> {
        let window_attrs = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height));

        let window = event_loop.create_window(window_attrs)?;
        let raw_handle = window
            .window_handle()
            .map_err(|e| SceneError::Window(e.to_string()))?
            .as_raw();
        let raw_display = window
            .display_handle()
            .map_err(|e| SceneError::Window(e.to_string()))?
            .as_raw();

        let gl_display = unsafe { Display::new(raw_display, display_api(raw_handle)) }?;

        let config_template = ConfigTemplateBuilder::new()
            .with_depth_size(24)
            .compatible_with_native_window(raw_handle)
            .build();
        let configs = unsafe { gl_display.find_configs(config_template) }?;
        let gl_config = deepest(configs, |config| config.depth_size())
            .ok_or_else(|| SceneError::Window("display offered no GL configs".into()))?;

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        let not_current_context =
            unsafe { gl_display.create_context(&gl_config, &context_attrs) }?;

        let (width, height) = non_zero_size(window.inner_size())?;
        let surface_attrs =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_handle, width, height);
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }?;

        let gl_context = not_current_context.make_current(&gl_surface)?;

        if settings.vsync {
            if let Err(e) = gl_surface
                .set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        Ok(Self {
            window,
            gl_context,
            gl_surface,
            gl,
        })
    }

    /// Depth testing on, black clear colour, viewport covering the framebuffer.
    pub fn init_gl_state(&self) {
        let (width, height) = self.framebuffer_size();
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
            self.gl.enable(glow::DEPTH_TEST);
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        }
    }

    /// Hide the cursor and pin it in place. Look input comes from raw device
    /// motion, so a confined grab is only a fallback.
    pub fn capture_cursor(&self) {
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
        self.window.set_cursor_visible(false);
    }

    pub fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Width over height, falling back to 1 for a collapsed window.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.framebuffer_size();
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    pub fn resize(&self, new_size: PhysicalSize<u32>) {
        let Ok((width, height)) = non_zero_size(new_size) else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, width, height);
        unsafe {
            self.gl.viewport(0, 0, new_size.width as i32, new_size.height as i32);
        }
        log::debug!("resized to {}x{}", new_size.width, new_size.height);
    }

    pub fn swap_buffers(&self) -> Result<(), SceneError> {
        self.gl_surface.swap_buffers(&self.gl_context)?;
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn display_api(window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Wgl(Some(window))
}

#[cfg(target_os = "macos")]
fn display_api(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn display_api(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

/// The candidate with the largest depth buffer, or `None` if there are none.
fn deepest<T>(candidates: impl Iterator<Item = T>, depth: impl Fn(&T) -> u8) -> Option<T> {
    candidates.max_by_key(|candidate| depth(candidate))
}

fn non_zero_size(size: PhysicalSize<u32>) -> Result<(NonZeroU32, NonZeroU32), SceneError> {
    match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(SceneError::Window(format!(
            "window has zero size ({}x{})",
            size.width, size.height
        ))),
    }
}
