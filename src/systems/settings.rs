//! Settings application system.
//!
//! Pushes [`Settings`](crate::resources::settings::Settings) to the host
//! window whenever the resource changes. The FPS overlay flag is read by the
//! render system directly; only VSync needs a side effect here.

use bevy_ecs::prelude::*;
use raylib::ffi;

use crate::resources::settings::Settings;

/// Apply changed settings to the window state.
pub fn apply_settings_changes(settings: Res<Settings>) {
    if settings.is_changed() || settings.is_added() {
        unsafe {
            if settings.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }
        log::info!(
            "settings applied: show_fps={}, vsync={}",
            settings.show_fps,
            settings.vsync
        );
    }
}
