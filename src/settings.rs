use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Plane with Cubes".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

impl WindowSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "window").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Units per second.
    pub move_speed: f32,
    /// Degrees per count of raw mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

impl ControlSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "controls").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSettings {
    pub texture_path: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            texture_path: "sugar.jpg".to_string(),
        }
    }
}

impl SceneSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "scene").unwrap_or_default()
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub controls: ControlSettings,
    pub scene: SceneSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            window: WindowSettings::load(),
            controls: ControlSettings::load(),
            scene: SceneSettings::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_scene() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.window.title, "Plane with Cubes");
        assert_eq!(settings.controls.move_speed, 2.5);
        assert_eq!(settings.controls.mouse_sensitivity, 0.1);
        assert_eq!(settings.scene.texture_path, "sugar.jpg");
    }
}
