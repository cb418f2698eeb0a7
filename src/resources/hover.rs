//! Pointer hover claim resource.
//!
//! Set each frame by the overlay hover system. When the overlay claims the
//! pointer, gameplay click handling stands down so clicks on UI widgets do
//! not double-fire into the game field.

use bevy_ecs::prelude::Resource;

/// Whether any overlay region currently contains the pointer.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct UiHover {
    pub hovered: bool,
}
