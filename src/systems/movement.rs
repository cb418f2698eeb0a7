use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate entity positions from their velocities.
///
/// Positions are unbounded; nothing clamps to the map edges. Each change is
/// logged so movement stays observable without a player sprite on screen.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.velocity.x == 0.0 && rigidbody.velocity.y == 0.0 {
            continue;
        }
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;
        log::debug!("position {{ {}, {} }}", position.pos.x, position.pos.y);
    }
}
