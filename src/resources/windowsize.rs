//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, updated each frame so that
//! overlay layout and the settings panel placement follow window resizes.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
