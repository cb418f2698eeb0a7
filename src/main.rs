//! Tilewalk main entry point.
//!
//! A small 2D tile-scrolling demo written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The demo renders a multi-layer tile map, moves an invisible player avatar
//! with WASD (the camera follows it, so the world scrolls), and opens a
//! modal settings window (FPS overlay, VSync) on Escape.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, velocity, input control)
//! - [`events`] – input edge events
//! - [`game`] – startup asset loading and entity spawning
//! - [`resources`] – ECS resources (config, input, timing, menu, stores)
//! - [`systems`] – ECS systems (input, movement, camera, overlay, render)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Load the tile atlas and map, spawn the player
//! 3. Register the menu observer and the update schedule
//! 4. Each frame: poll input, update the overlay hover claim, integrate
//!    movement, follow with the camera, apply settings, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::resources::camera::ViewCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hover::UiHover;
use crate::resources::input::InputState;
use crate::resources::menu::{MenuState, SettingsPanel};
use crate::resources::settings::Settings;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow;
use crate::systems::hud::{gamefield_click_system, ui_hover_system};
use crate::systems::input::update_input_state;
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::settings::apply_settings_changes;
use crate::systems::settingsmenu::{menu_open_observer, settings_panel_system};
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

/// Tilewalk: a scrolling tile-map demo with an overlay settings menu.
#[derive(Parser)]
#[command(version, about = "A scrolling tile-map demo with an overlay settings menu")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // missing file keeps defaults

    let (window_width, window_height) = config.window_size();

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Tilewalk")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape opens the settings menu instead of quitting
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(ViewCamera(Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: config.zoom,
    }));
    world.insert_resource(MenuState::default());
    world.insert_resource(SettingsPanel::default());
    world.insert_resource(UiHover::default());
    world.insert_resource(Settings::from_config(&config));
    world.insert_resource(config);

    game::setup(&mut world, &mut rl, &thread);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(menu_open_observer));
    // Ensure the observer is registered before systems trigger events.
    world.flush();

    // --------------- Update schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(ui_hover_system.after(update_input_state));
    update.add_systems(gamefield_click_system.after(ui_hover_system));
    update.add_systems(settings_panel_system.after(ui_hover_system));
    update.add_systems(input_simple_controller.after(update_input_state));
    update.add_systems(movement.after(input_simple_controller));
    update.add_systems(camera_follow.after(movement));
    update.add_systems(apply_settings_changes);
    update.add_systems(
        render_system
            .after(camera_follow)
            .after(gamefield_click_system)
            .after(settings_panel_system)
            .after(apply_settings_changes),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    let time = world.resource::<WorldTime>();
    log::info!("quitting after {:.1}s", time.elapsed);
}
