//! User-adjustable runtime settings.
//!
//! Created once at startup and mutated only by the checkboxes in the open
//! settings menu. Read every frame regardless of menu state: `show_fps`
//! gates the FPS overlay, `vsync` is pushed to the window flags whenever it
//! changes.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::GameConfig;

/// Runtime settings adjustable from the settings menu.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Draw the achieved frame rate as a text overlay.
    pub show_fps: bool,
    /// Vertical sync requested from the host window.
    pub vsync: bool,
}

impl Settings {
    /// Initial settings: FPS overlay off, VSync as configured at startup.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            show_fps: false,
            vsync: config.vsync,
        }
    }

    pub fn toggle_show_fps(&mut self) {
        self.show_fps = !self.show_fps;
    }

    pub fn toggle_vsync(&mut self) {
        self.vsync = !self.vsync;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_from_config() {
        let config = GameConfig::new();
        let settings = Settings::from_config(&config);
        assert!(!settings.show_fps);
        assert_eq!(settings.vsync, config.vsync);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut settings = Settings::from_config(&GameConfig::new());
        let initial = settings;

        settings.toggle_show_fps();
        assert!(settings.show_fps);
        settings.toggle_show_fps();
        assert_eq!(settings, initial);

        settings.toggle_vsync();
        assert_ne!(settings.vsync, initial.vsync);
        settings.toggle_vsync();
        assert_eq!(settings, initial);
    }
}
