//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! derives a velocity for entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. The combined direction is normalized, so diagonal movement has
//! the same speed as axis-aligned movement, and exactly opposite keys cancel
//! to a standstill.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rigidbody) in query.iter_mut() {
        let mut direction = Vector2 { x: 0.0, y: 0.0 };

        if input_state.maindirection_up.active {
            direction += controlled.up;
        }
        if input_state.maindirection_down.active {
            direction += controlled.down;
        }
        if input_state.maindirection_left.active {
            direction += controlled.left;
        }
        if input_state.maindirection_right.active {
            direction += controlled.right;
        }

        if direction.x != 0.0 || direction.y != 0.0 {
            rigidbody.velocity = direction.normalized() * controlled.speed;
        } else {
            rigidbody.velocity = Vector2 { x: 0.0, y: 0.0 };
        }
    }
}
