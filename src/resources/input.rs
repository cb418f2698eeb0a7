//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Defaults use WASD
//! for movement and Escape for the settings menu.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Boolean button state with an associated mouse binding.
#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,

    /// The mouse button bound to this action.
    pub button_binding: MouseButton,
}

impl ButtonState {
    pub fn bound_to(button: MouseButton) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button_binding: button,
        }
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
///
/// Fields are grouped by purpose: main movement (WASD), the menu key
/// (Escape), and the primary pointer button plus pointer position.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    pub action_back: BoolState,
    pub pointer_primary: ButtonState,
    /// Pointer position in window coordinates.
    pub pointer_position: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            pointer_primary: ButtonState::bound_to(MouseButton::MOUSE_BUTTON_LEFT),
            pointer_position: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
