//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Press and
//! release edges are additionally emitted as
//! [`InputEvent`](crate::events::input::InputEvent) triggers so observers can
//! react to edges (like Escape opening the menu) without polling.

use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::{BoolState, ButtonState, InputState};

fn refresh_key(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

fn refresh_button(state: &mut ButtonState, rl: &raylib::RaylibHandle) {
    state.active = rl.is_mouse_button_down(state.button_binding);
    state.just_pressed = rl.is_mouse_button_pressed(state.button_binding);
    state.just_released = rl.is_mouse_button_released(state.button_binding);
}

fn emit_edges(commands: &mut Commands, state: &BoolState, action: InputAction) {
    if state.just_pressed {
        commands.trigger(InputEvent {
            action,
            pressed: true,
        });
    }
    if state.just_released {
        commands.trigger(InputEvent {
            action,
            pressed: false,
        });
    }
}

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource, emitting edge events for the bound actions.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let rl = &*rl;

    refresh_key(&mut input.maindirection_up, rl);
    refresh_key(&mut input.maindirection_left, rl);
    refresh_key(&mut input.maindirection_down, rl);
    refresh_key(&mut input.maindirection_right, rl);
    refresh_key(&mut input.action_back, rl);
    refresh_button(&mut input.pointer_primary, rl);
    input.pointer_position = rl.get_mouse_position();

    emit_edges(&mut commands, &input.maindirection_up, InputAction::MainDirectionUp);
    emit_edges(&mut commands, &input.maindirection_left, InputAction::MainDirectionLeft);
    emit_edges(&mut commands, &input.maindirection_down, InputAction::MainDirectionDown);
    emit_edges(&mut commands, &input.maindirection_right, InputAction::MainDirectionRight);
    emit_edges(&mut commands, &input.action_back, InputAction::Back);
}
