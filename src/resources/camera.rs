//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera-follow system keeps `target`
//! on the player; `zoom` stays at the configured fixed factor, so a world
//! point lands on screen at `(world - target) * zoom`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera2D;

/// ECS resource holding the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct ViewCamera(pub Camera2D);
