//! Overlay layout, pointer hover claim, and game-field clicks.
//!
//! The overlay is immediate mode: these functions define where its regions
//! live, and [`ui_hover_system`] decides each frame whether the overlay
//! claims the pointer. [`gamefield_click_system`] only fires for clicks the
//! overlay did not claim, so UI clicks never double-fire into the game.

use bevy_ecs::prelude::*;
use raylib::prelude::Rectangle;

use crate::resources::hover::UiHover;
use crate::resources::input::InputState;
use crate::resources::menu::{MenuState, SettingsPanel};
use crate::resources::windowsize::WindowSize;

/// Height of the header strip across the top of the window.
pub const HEADER_HEIGHT: f32 = 48.0;
/// Height of the progress bar track at the bottom of the window.
pub const PROGRESS_HEIGHT: f32 = 20.0;
/// Margin between overlay elements and the window edges.
pub const OVERLAY_MARGIN: f32 = 5.0;

/// Header strip bounds: stretched across the top of the window.
pub fn header_bounds(window: &WindowSize) -> Rectangle {
    Rectangle {
        x: OVERLAY_MARGIN,
        y: OVERLAY_MARGIN,
        width: window.w as f32 - 2.0 * OVERLAY_MARGIN,
        height: HEADER_HEIGHT,
    }
}

/// Progress bar track bounds: stretched across the bottom of the window.
pub fn progress_bounds(window: &WindowSize) -> Rectangle {
    Rectangle {
        x: OVERLAY_MARGIN,
        y: window.h as f32 - PROGRESS_HEIGHT - OVERLAY_MARGIN,
        width: window.w as f32 - 2.0 * OVERLAY_MARGIN,
        height: PROGRESS_HEIGHT,
    }
}

/// Decide whether any overlay region contains the pointer this frame.
pub fn ui_hover_system(
    input: Res<InputState>,
    window: Res<WindowSize>,
    menu: Res<MenuState>,
    panel: Res<SettingsPanel>,
    mut hover: ResMut<UiHover>,
) {
    let pointer = input.pointer_position;
    let mut hovered = header_bounds(&window).check_collision_point_rec(pointer)
        || progress_bounds(&window).check_collision_point_rec(pointer);
    if menu.is_open() {
        hovered = hovered || panel.bounds.check_collision_point_rec(pointer);
    }
    hover.hovered = hovered;
}

/// Log clicks that land on the game field rather than on the overlay.
pub fn gamefield_click_system(input: Res<InputState>, hover: Res<UiHover>) {
    if input.pointer_primary.just_pressed && !hover.hovered {
        log::info!("pointer clicked on the game field");
    }
}
