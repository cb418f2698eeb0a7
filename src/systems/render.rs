//! Render system.
//!
//! Draws the tile world under the 2D camera, then the overlay on top:
//! header bar, progress bar, the settings window when open, and the FPS
//! counter when enabled. The overlay uses raygui immediate-mode widgets, so
//! widget interaction (checkbox toggles, window close) also happens here.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::camera::ViewCamera;
use crate::resources::hover::UiHover;
use crate::resources::menu::{MenuState, SettingsPanel};
use crate::resources::settings::Settings;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemapstore::TilemapStore;
use crate::resources::windowsize::WindowSize;
use crate::systems::hud::{header_bounds, progress_bounds};

/// Store key of the map drawn each frame.
pub const WORLD_MAP_KEY: &str = "overworld";
/// Store key of the tile atlas texture.
pub const TILE_ATLAS_KEY: &str = "tiles";

// Overlay palette, from the demo's original theme.
const BACKGROUND_COLOR: Color = Color {
    r: 0x13,
    g: 0x1a,
    b: 0x22,
    a: 255,
};
const TEXT_IDLE_COLOR: Color = Color {
    r: 0xdf,
    g: 0xf4,
    b: 0xff,
    a: 255,
};
const PROGRESS_TRACK_COLOR: Color = Color {
    r: 100,
    g: 100,
    b: 100,
    a: 255,
};
const PROGRESS_FILL_COLOR: Color = Color {
    r: 255,
    g: 255,
    b: 100,
    a: 255,
};

/// Top-level render system. Runs last in the schedule.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("RaylibHandle not in world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("RaylibThread not in world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND_COLOR);

        {
            let camera = world.resource::<ViewCamera>().0;
            let mut d2 = d.begin_mode2D(camera);
            render_world(world, &mut d2);
        }

        draw_overlay(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw every layer of the world map in declaration order. Later layers
/// paint over earlier ones.
fn render_world(world: &World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let tilemaps = world.resource::<TilemapStore>();
    let textures = world.resource::<TextureStore>();
    let Some(map) = tilemaps.get(WORLD_MAP_KEY) else {
        return;
    };
    let Some(atlas) = textures.get(TILE_ATLAS_KEY) else {
        return;
    };

    let cells_per_row = (atlas.width as u32 / map.tile_size).max(1);
    for blit in map.tile_draws(cells_per_row) {
        d2.draw_texture_pro(
            atlas,
            blit.source,
            blit.dest,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}

/// Draw the overlay: header, progress bar, settings window, FPS counter.
fn draw_overlay(world: &mut World, d: &mut RaylibDrawHandle) {
    let window = *world.resource::<WindowSize>();
    let hovered = world.resource::<UiHover>().hovered;

    // Header strip with the current hover claim, mirrored into the text so
    // it stays observable without a debugger.
    let header = header_bounds(&window);
    d.draw_rectangle_rec(header, Color::BLACK);
    let text = format!("Tilewalk demo | UI hovered: {}", hovered);
    let text_width = d.measure_text(&text, 20);
    d.draw_text(
        &text,
        header.x as i32 + (header.width as i32 - text_width) / 2,
        header.y as i32 + (header.height as i32 - 20) / 2,
        20,
        TEXT_IDLE_COLOR,
    );

    // Progress bar garnish: a static 7/10 track at the bottom.
    let track = progress_bounds(&window);
    d.draw_rectangle_rec(track, PROGRESS_TRACK_COLOR);
    let fill = Rectangle {
        x: track.x,
        y: track.y + 2.0,
        width: track.width * 0.7,
        height: track.height - 4.0,
    };
    d.draw_rectangle_rec(fill, PROGRESS_FILL_COLOR);
    let label_width = d.measure_text("70%", 14);
    d.draw_text(
        "70%",
        (track.x + track.width / 2.0) as i32 - label_width / 2,
        (track.y + 3.0) as i32,
        14,
        Color::BLACK,
    );

    draw_settings_window(world, d);

    if world.resource::<Settings>().show_fps {
        let fps = d.get_fps();
        d.draw_text(
            &format!("FPS: {}", fps),
            header.x as i32 + 4,
            (header.y + header.height) as i32 + 8,
            20,
            TEXT_IDLE_COLOR,
        );
    }
}

/// Draw and operate the settings window while the menu is open.
///
/// The checkboxes flip [`Settings`] immediately; the title-bar close button
/// is the only transition back to [`MenuState::Closed`].
fn draw_settings_window(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.resource::<MenuState>().is_open() {
        return;
    }
    let panel = *world.resource::<SettingsPanel>();
    let current = *world.resource::<Settings>();
    let mut settings = current;

    let close_clicked = d.gui_window_box(panel.bounds, "Main Menu");

    let mut show_fps = settings.show_fps;
    d.gui_check_box(panel.show_fps_box(), "Show FPS", &mut show_fps);
    let mut vsync = settings.vsync;
    d.gui_check_box(panel.vsync_box(), "VSync", &mut vsync);

    let grip = panel.resize_grip();
    d.draw_rectangle_lines(
        grip.x as i32,
        grip.y as i32,
        grip.width as i32,
        grip.height as i32,
        Color::GRAY,
    );

    if show_fps != settings.show_fps {
        settings.toggle_show_fps();
    }
    if vsync != settings.vsync {
        settings.toggle_vsync();
    }
    if settings != current {
        *world.resource_mut::<Settings>() = settings;
    }

    if close_clicked {
        *world.resource_mut::<MenuState>() = MenuState::Closed;
        log::info!("settings menu closed");
    }
}
