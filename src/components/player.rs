use bevy_ecs::prelude::Component;

/// Marker for the player avatar. The camera follows this entity; the avatar
/// itself has no sprite, so moving it scrolls the world around the viewport.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;
