//! Kinematic body component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Current velocity in world units per second.
///
/// Controllers rewrite the velocity from input every frame before the
/// movement system integrates it, so no velocity survives across ticks.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
