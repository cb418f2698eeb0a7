//! Settings menu systems.
//!
//! - [`menu_open_observer`] – opens the menu on an Escape press edge
//! - [`settings_panel_system`] – drags/resizes the open panel with the pointer
//!
//! Closing goes through the window's close button, handled where the
//! immediate-mode window is drawn (see [`crate::systems::render`]).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;
use crate::resources::menu::{MenuState, SettingsPanel};
use crate::resources::windowsize::WindowSize;

/// Open the settings menu on an Escape press edge.
///
/// Only the press edge counts; holding Escape does nothing further, and a
/// press while the menu is already open is ignored.
pub fn menu_open_observer(
    trigger: On<InputEvent>,
    mut menu: ResMut<MenuState>,
    mut panel: ResMut<SettingsPanel>,
    window: Res<WindowSize>,
) {
    let event = trigger.event();
    if event.action != InputAction::Back || !event.pressed {
        return;
    }
    log::info!("escape pressed");
    if menu.is_open() {
        return;
    }
    panel.place(window.w, window.h);
    *menu = MenuState::MainMenuOpen;
    log::info!("settings menu opened");
}

/// Drag and resize the open settings panel.
///
/// The title bar (minus the close button) drags, the bottom-right grip
/// resizes within the panel's size limits. Moves and resizes are logged and
/// have no effect on game state.
pub fn settings_panel_system(
    menu: Res<MenuState>,
    mut panel: ResMut<SettingsPanel>,
    input: Res<InputState>,
) {
    if !menu.is_open() {
        if panel.dragging || panel.resizing {
            panel.dragging = false;
            panel.resizing = false;
        }
        return;
    }

    let pointer = input.pointer_position;

    if input.pointer_primary.just_pressed {
        if panel.resize_grip().check_collision_point_rec(pointer) {
            panel.resizing = true;
        } else if panel.drag_region().check_collision_point_rec(pointer) {
            panel.dragging = true;
            panel.drag_offset = Vector2 {
                x: pointer.x - panel.bounds.x,
                y: pointer.y - panel.bounds.y,
            };
        }
    }
    if input.pointer_primary.just_released && (panel.dragging || panel.resizing) {
        panel.dragging = false;
        panel.resizing = false;
    }

    if panel.dragging {
        let new_x = pointer.x - panel.drag_offset.x;
        let new_y = pointer.y - panel.drag_offset.y;
        if new_x != panel.bounds.x || new_y != panel.bounds.y {
            panel.bounds.x = new_x;
            panel.bounds.y = new_y;
            log::debug!("move: {:?}", panel.bounds);
        }
    } else if panel.resizing {
        let (width, height) =
            SettingsPanel::clamp_size(pointer.x - panel.bounds.x, pointer.y - panel.bounds.y);
        if width != panel.bounds.width || height != panel.bounds.height {
            panel.bounds.width = width;
            panel.bounds.height = height;
            log::debug!("resize: {:?}", panel.bounds);
        }
    }
}
