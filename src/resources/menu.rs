//! Settings menu state machine and panel geometry.
//!
//! The menu is a two-state machine: [`MenuState::Closed`] and
//! [`MenuState::MainMenuOpen`]. Opening is edge-triggered by the Escape key
//! (handled by an observer), closing only happens through the window's close
//! button. While open, the panel can be dragged by its title bar and resized
//! by the corner grip; neither affects game state.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Height of the panel title bar, matching the raygui window box status bar.
pub const TITLE_BAR_HEIGHT: f32 = 24.0;
/// Side length of a settings checkbox.
pub const CHECK_SIZE: f32 = 16.0;
/// Side length of the resize grip in the bottom-right corner.
pub const GRIP_SIZE: f32 = 16.0;

/// Panel size on open and its resize limits.
pub const PANEL_SIZE: (f32, f32) = (550.0, 250.0);
pub const PANEL_MIN_SIZE: (f32, f32) = (500.0, 200.0);
pub const PANEL_MAX_SIZE: (f32, f32) = (700.0, 400.0);

/// Which overlay window, if any, is currently open.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    MainMenuOpen,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::MainMenuOpen
    }
}

/// Geometry and interaction bookkeeping for the open settings window.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SettingsPanel {
    pub bounds: Rectangle,
    /// True while the title bar is being dragged.
    pub dragging: bool,
    /// Pointer offset from the panel origin at drag start.
    pub drag_offset: Vector2,
    /// True while the corner grip is being dragged.
    pub resizing: bool,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self {
            bounds: Rectangle {
                x: 0.0,
                y: 0.0,
                width: PANEL_SIZE.0,
                height: PANEL_SIZE.1,
            },
            dragging: false,
            drag_offset: Vector2 { x: 0.0, y: 0.0 },
            resizing: false,
        }
    }
}

impl SettingsPanel {
    /// Re-seed the panel placement for the current window size: a fixed
    /// fraction of the window (x = w/8, y = h/3) at the default size.
    pub fn place(&mut self, window_w: i32, window_h: i32) {
        self.bounds = Rectangle {
            x: window_w as f32 / 8.0,
            y: window_h as f32 / 3.0,
            width: PANEL_SIZE.0,
            height: PANEL_SIZE.1,
        };
        self.dragging = false;
        self.resizing = false;
    }

    /// Title bar strip, excluding the close button at its right end.
    pub fn drag_region(&self) -> Rectangle {
        Rectangle {
            x: self.bounds.x,
            y: self.bounds.y,
            width: (self.bounds.width - TITLE_BAR_HEIGHT).max(0.0),
            height: TITLE_BAR_HEIGHT,
        }
    }

    /// Grip square in the bottom-right corner used for resizing.
    pub fn resize_grip(&self) -> Rectangle {
        Rectangle {
            x: self.bounds.x + self.bounds.width - GRIP_SIZE,
            y: self.bounds.y + self.bounds.height - GRIP_SIZE,
            width: GRIP_SIZE,
            height: GRIP_SIZE,
        }
    }

    /// Checkbox bounds for the "Show FPS" toggle.
    pub fn show_fps_box(&self) -> Rectangle {
        self.checkbox_row(0)
    }

    /// Checkbox bounds for the "VSync" toggle.
    pub fn vsync_box(&self) -> Rectangle {
        self.checkbox_row(1)
    }

    fn checkbox_row(&self, row: u32) -> Rectangle {
        Rectangle {
            x: self.bounds.x + 30.0,
            y: self.bounds.y + TITLE_BAR_HEIGHT + 20.0 + row as f32 * (CHECK_SIZE + 15.0),
            width: CHECK_SIZE,
            height: CHECK_SIZE,
        }
    }

    /// Clamp a requested size to the panel's resize limits.
    pub fn clamp_size(width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(PANEL_MIN_SIZE.0, PANEL_MAX_SIZE.0),
            height.clamp(PANEL_MIN_SIZE.1, PANEL_MAX_SIZE.1),
        )
    }
}
