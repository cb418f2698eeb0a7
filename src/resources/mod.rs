//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and accessed by systems
//! during execution.
//!
//! Overview
//! - `camera` – shared 2D camera used for world/screen transforms
//! - `gameconfig` – window/game settings with INI overrides
//! - `hover` – whether the UI overlay currently claims the pointer
//! - `input` – per-frame keyboard and mouse state
//! - `menu` – settings menu state machine and panel geometry
//! - `settings` – user-adjustable runtime settings (FPS overlay, VSync)
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemapstore` – loaded tile maps and layers
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod camera;
pub mod gameconfig;
pub mod hover;
pub mod input;
pub mod menu;
pub mod settings;
pub mod texturestore;
pub mod tilemapstore;
pub mod windowsize;
pub mod worldtime;
