//! Game systems.
//!
//! Submodules overview
//! - [`camera`] – keep the view camera on the player
//! - [`hud`] – overlay layout, hover claim, and game-field click handling
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into velocity on entities
//! - [`movement`] – integrate positions from velocities and time
//! - [`render`] – draw the tile world and overlay using Raylib
//! - [`settings`] – push settings changes to the host window
//! - [`settingsmenu`] – open the menu on Escape, drag/resize the panel
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod hud;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod settings;
pub mod settingsmenu;
pub mod time;
