//! Simulation time resource.
//!
//! Updated once per frame from the engine-reported frame time. The delta is
//! clamped to [`MIN_FRAME_DELTA`] so that a zero or negative report from the
//! host never produces degenerate movement or division artifacts.

use bevy_ecs::prelude::Resource;

/// Lower bound for the per-frame delta, in seconds.
pub const MIN_FRAME_DELTA: f64 = 0.001;

/// Per-frame timing derived from the engine's achieved rate.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total elapsed simulation time in seconds.
    pub elapsed: f64,
    /// Clamped frame delta in seconds, single precision.
    pub delta: f32,
    /// Clamped frame delta in seconds, double precision.
    pub delta64: f64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            delta64: 0.0,
        }
    }
}
