//! Game configuration resource.
//!
//! Compile-time defaults for the demo, optionally overlaid from an INI file.
//! Missing file or keys keep the defaults, so startup is always safe.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 920
//! height = 920
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! tile_size = 16
//! map_width = 15
//! movement_speed = 100.0
//! zoom = 4.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 920;
const DEFAULT_WINDOW_HEIGHT: u32 = 920;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TILE_SIZE: u32 = 16;
const DEFAULT_MAP_WIDTH: u32 = 15;
const DEFAULT_MOVEMENT_SPEED: f32 = 100.0;
const DEFAULT_ZOOM: f32 = 4.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Read by startup code for window creation and by systems that need the
/// static game constants (tile size, movement speed, zoom).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target simulation/render rate in ticks per second.
    pub target_fps: u32,
    /// Initial vertical sync state.
    pub vsync: bool,
    /// Size of a square tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Player movement speed in world units per second.
    pub movement_speed: f32,
    /// Fixed render zoom applied after the camera translation.
    pub zoom: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the demo's default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            tile_size: DEFAULT_TILE_SIZE,
            map_width: DEFAULT_MAP_WIDTH,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            zoom: DEFAULT_ZOOM,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(tile_size) = config.getuint("game", "tile_size").ok().flatten() {
            self.tile_size = tile_size as u32;
        }
        if let Some(map_width) = config.getuint("game", "map_width").ok().flatten() {
            self.map_width = map_width as u32;
        }
        if let Some(speed) = config.getfloat("game", "movement_speed").ok().flatten() {
            self.movement_speed = speed as f32;
        }
        if let Some(zoom) = config.getfloat("game", "zoom").ok().flatten() {
            self.zoom = zoom as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, tile={}px, speed={}, zoom={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.tile_size,
            self.movement_speed,
            self.zoom
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("game", "tile_size", Some(self.tile_size.to_string()));
        config.set("game", "map_width", Some(self.map_width.to_string()));
        config.set(
            "game",
            "movement_speed",
            Some(self.movement_speed.to_string()),
        );
        config.set("game", "zoom", Some(self.zoom.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
