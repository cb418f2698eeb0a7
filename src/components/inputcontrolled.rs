//! Keyboard-driven movement component.
//!
//! The controller system in [`crate::systems::inputsimplecontroller`] reads
//! the current input state and this component to produce a velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Movement intent derived from the main direction keys.
///
/// Each field is the direction contributed while the corresponding key is
/// held. The summed direction is normalized before scaling by `speed`, so
/// diagonal movement is exactly as fast as axis-aligned movement.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    pub up: Vector2,
    pub down: Vector2,
    pub left: Vector2,
    pub right: Vector2,
    /// Movement speed in world units per second.
    pub speed: f32,
}

impl InputControlled {
    /// Cardinal movement: up is -Y, down is +Y, left is -X, right is +X.
    pub fn cardinal(speed: f32) -> Self {
        Self {
            up: Vector2 { x: 0.0, y: -1.0 },
            down: Vector2 { x: 0.0, y: 1.0 },
            left: Vector2 { x: -1.0, y: 0.0 },
            right: Vector2 { x: 1.0, y: 0.0 },
            speed,
        }
    }
}
