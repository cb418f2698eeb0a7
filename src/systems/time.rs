//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from the engine-reported frame delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::{MIN_FRAME_DELTA, WorldTime};

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds as reported by the host.
/// The value is clamped to at least [`MIN_FRAME_DELTA`] so a zero or
/// negative report never reaches the movement integration.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let clamped = f64::from(dt).max(MIN_FRAME_DELTA);
    wt.delta64 = clamped;
    wt.delta = clamped as f32;
    wt.elapsed += clamped;
}
