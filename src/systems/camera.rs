//! Camera-follow system.
//!
//! The camera target tracks the player position, so the world scrolls
//! opposite to player movement while the viewport anchor stays fixed.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::ViewCamera;

/// Keep the view camera's target on the player.
pub fn camera_follow(
    query: Query<&MapPosition, With<Player>>,
    mut camera: ResMut<ViewCamera>,
) {
    let Ok(position) = query.single() else {
        return;
    };
    camera.0.target = position.pos;
}
