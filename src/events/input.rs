//! Input action events.
//!
//! [`InputEvent`] is triggered on press/release edges of gameplay-relevant
//! keys. Observers subscribe to these instead of reading the
//! [`InputState`](crate::resources::input::InputState) resource, which keeps
//! edge-triggered behavior (like opening the settings menu) separate from
//! held-key behavior (like movement).

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Primary direction: up (default: W key).
    MainDirectionUp,
    /// Primary direction: down (default: S key).
    MainDirectionDown,
    /// Primary direction: left (default: A key).
    MainDirectionLeft,
    /// Primary direction: right (default: D key).
    MainDirectionRight,
    /// Back/menu action (default: Escape).
    Back,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
