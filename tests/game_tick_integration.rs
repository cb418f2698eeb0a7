//! Whole-tick integration tests for movement, timing, the menu state
//! machine, the panel interaction, and the overlay hover claim.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use tilewalk::components::inputcontrolled::InputControlled;
use tilewalk::components::mapposition::MapPosition;
use tilewalk::components::player::Player;
use tilewalk::components::rigidbody::RigidBody;
use tilewalk::events::input::{InputAction, InputEvent};
use tilewalk::resources::camera::ViewCamera;
use tilewalk::resources::hover::UiHover;
use tilewalk::resources::input::InputState;
use tilewalk::resources::menu::{MenuState, SettingsPanel};
use tilewalk::resources::windowsize::WindowSize;
use tilewalk::resources::worldtime::WorldTime;
use tilewalk::systems::camera::camera_follow;
use tilewalk::systems::hud::ui_hover_system;
use tilewalk::systems::inputsimplecontroller::input_simple_controller;
use tilewalk::systems::movement::movement;
use tilewalk::systems::settingsmenu::{menu_open_observer, settings_panel_system};
use tilewalk::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;
const SPEED: f32 = 100.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize { w: 920, h: 920 });
    world.insert_resource(MenuState::default());
    world.insert_resource(SettingsPanel::default());
    world.insert_resource(UiHover::default());
    world
}

fn spawn_player(world: &mut World) -> Entity {
    world
        .spawn((
            Player,
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            InputControlled::cardinal(SPEED),
        ))
        .id()
}

fn hold_keys(world: &mut World, up: bool, down: bool, left: bool, right: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.maindirection_up.active = up;
    input.maindirection_down.active = down;
    input.maindirection_left.active = left;
    input.maindirection_right.active = right;
}

fn tick_movement(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(input_simple_controller);
    schedule.add_systems(movement.after(input_simple_controller));
    schedule.run(world);
}

fn player_pos(world: &mut World, entity: Entity) -> Vector2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

// ==================== MOVEMENT ====================

#[test]
fn single_key_moves_at_full_speed() {
    let mut world = make_world();
    let entity = spawn_player(&mut world);

    hold_keys(&mut world, true, false, false, false);
    tick_movement(&mut world, 0.5);

    let pos = player_pos(&mut world, entity);
    assert!(approx_eq(pos.x, 0.0));
    assert!(approx_eq(pos.y, -50.0));
}

#[test]
fn diagonal_displacement_equals_axis_aligned_speed() {
    let mut world = make_world();
    let entity = spawn_player(&mut world);

    // Up+Left for one simulated second at speed 100
    hold_keys(&mut world, true, false, true, false);
    tick_movement(&mut world, 1.0);

    let pos = player_pos(&mut world, entity);
    let expected = -100.0 / std::f32::consts::SQRT_2;
    assert!(approx_eq(pos.x, expected), "x = {}", pos.x);
    assert!(approx_eq(pos.y, expected), "y = {}", pos.y);
    let magnitude = (pos.x * pos.x + pos.y * pos.y).sqrt();
    assert!(approx_eq(magnitude, SPEED));
}

#[test]
fn displacement_magnitude_is_constant_across_key_sets() {
    // every non-cancelling held-direction set moves speed * dt per tick
    let sets = [
        (true, false, false, false),
        (false, true, false, false),
        (false, false, true, false),
        (false, false, false, true),
        (true, false, true, false),
        (true, false, false, true),
        (false, true, true, false),
        (false, true, false, true),
        (true, true, true, false),  // up/down cancel, left remains
        (true, false, true, true),  // left/right cancel, up remains
    ];
    for (up, down, left, right) in sets {
        let mut world = make_world();
        let entity = spawn_player(&mut world);
        hold_keys(&mut world, up, down, left, right);
        tick_movement(&mut world, 0.25);

        let pos = player_pos(&mut world, entity);
        let magnitude = (pos.x * pos.x + pos.y * pos.y).sqrt();
        assert!(
            approx_eq(magnitude, SPEED * 0.25),
            "set {:?} moved {}",
            (up, down, left, right),
            magnitude
        );
    }
}

#[test]
fn opposite_keys_cancel_to_standstill() {
    let cancelling = [
        (false, false, false, false),
        (true, true, false, false),
        (false, false, true, true),
        (true, true, true, true),
    ];
    for (up, down, left, right) in cancelling {
        let mut world = make_world();
        let entity = spawn_player(&mut world);
        hold_keys(&mut world, up, down, left, right);
        tick_movement(&mut world, 1.0);

        let pos = player_pos(&mut world, entity);
        assert!(approx_eq(pos.x, 0.0) && approx_eq(pos.y, 0.0), "set {:?} moved", (up, down, left, right));
    }
}

#[test]
fn releasing_all_keys_stops_movement() {
    let mut world = make_world();
    let entity = spawn_player(&mut world);

    hold_keys(&mut world, false, false, false, true);
    tick_movement(&mut world, 1.0);
    let after_move = player_pos(&mut world, entity);
    assert!(approx_eq(after_move.x, 100.0));

    hold_keys(&mut world, false, false, false, false);
    tick_movement(&mut world, 1.0);
    let after_stop = player_pos(&mut world, entity);
    assert!(approx_eq(after_stop.x, after_move.x));
    assert!(approx_eq(after_stop.y, after_move.y));
}

// ==================== TIMING ====================

#[test]
fn frame_delta_is_clamped_to_minimum() {
    let mut world = make_world();

    update_world_time(&mut world, 0.0);
    let time = *world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.001));
    assert_eq!(time.delta64, 0.001);

    update_world_time(&mut world, -0.25);
    let time = *world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.001));

    update_world_time(&mut world, 0.016);
    let time = *world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.016));
    assert!(time.elapsed > 0.017 && time.elapsed < 0.019);
}

#[test]
fn zero_reported_delta_still_moves_a_little() {
    let mut world = make_world();
    let entity = spawn_player(&mut world);

    hold_keys(&mut world, false, false, false, true);
    tick_movement(&mut world, 0.0);

    let pos = player_pos(&mut world, entity);
    assert!(approx_eq(pos.x, SPEED * 0.001));
}

// ==================== MENU STATE MACHINE ====================

fn make_menu_world() -> World {
    let mut world = make_world();
    world.spawn(Observer::new(menu_open_observer));
    world.flush();
    world
}

fn press_escape(world: &mut World) {
    world.trigger(InputEvent {
        action: InputAction::Back,
        pressed: true,
    });
}

#[test]
fn escape_press_opens_menu_and_places_panel() {
    let mut world = make_menu_world();
    assert_eq!(*world.resource::<MenuState>(), MenuState::Closed);

    press_escape(&mut world);

    assert_eq!(*world.resource::<MenuState>(), MenuState::MainMenuOpen);
    let panel = world.resource::<SettingsPanel>();
    assert!(approx_eq(panel.bounds.x, 920.0 / 8.0));
    assert!(approx_eq(panel.bounds.y, 920.0 / 3.0));
}

#[test]
fn escape_release_does_not_open_menu() {
    let mut world = make_menu_world();
    world.trigger(InputEvent {
        action: InputAction::Back,
        pressed: false,
    });
    assert_eq!(*world.resource::<MenuState>(), MenuState::Closed);
}

#[test]
fn other_actions_do_not_open_menu() {
    let mut world = make_menu_world();
    world.trigger(InputEvent {
        action: InputAction::MainDirectionUp,
        pressed: true,
    });
    assert_eq!(*world.resource::<MenuState>(), MenuState::Closed);
}

#[test]
fn repeated_escape_while_open_is_ignored() {
    let mut world = make_menu_world();
    press_escape(&mut world);

    // drag the panel somewhere, then press escape again: the open menu must
    // not be re-placed or otherwise disturbed
    world.resource_mut::<SettingsPanel>().bounds.x = 300.0;
    press_escape(&mut world);

    assert_eq!(*world.resource::<MenuState>(), MenuState::MainMenuOpen);
    assert!(approx_eq(world.resource::<SettingsPanel>().bounds.x, 300.0));
}

#[test]
fn close_then_escape_reopens_with_fresh_placement() {
    let mut world = make_menu_world();
    press_escape(&mut world);
    world.resource_mut::<SettingsPanel>().bounds.x = 300.0;

    // the close button is the only way out
    *world.resource_mut::<MenuState>() = MenuState::Closed;
    press_escape(&mut world);

    assert_eq!(*world.resource::<MenuState>(), MenuState::MainMenuOpen);
    assert!(approx_eq(world.resource::<SettingsPanel>().bounds.x, 115.0));
}

// ==================== PANEL INTERACTION ====================

fn tick_panel(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(settings_panel_system);
    schedule.run(world);
}

fn set_pointer(world: &mut World, x: f32, y: f32, just_pressed: bool, active: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer_position = Vector2 { x, y };
    input.pointer_primary.just_pressed = just_pressed;
    input.pointer_primary.active = active;
    input.pointer_primary.just_released = false;
}

#[test]
fn title_bar_drag_moves_panel() {
    let mut world = make_menu_world();
    press_escape(&mut world);
    let start = world.resource::<SettingsPanel>().bounds;

    // grab the title bar near its left edge
    set_pointer(&mut world, start.x + 10.0, start.y + 10.0, true, true);
    tick_panel(&mut world);
    assert!(world.resource::<SettingsPanel>().dragging);

    // move the pointer; the panel keeps the grab offset
    set_pointer(&mut world, start.x + 60.0, start.y + 30.0, false, true);
    tick_panel(&mut world);

    let bounds = world.resource::<SettingsPanel>().bounds;
    assert!(approx_eq(bounds.x, start.x + 50.0));
    assert!(approx_eq(bounds.y, start.y + 20.0));
    assert!(approx_eq(bounds.width, start.width));
}

#[test]
fn resize_grip_clamps_to_limits() {
    let mut world = make_menu_world();
    press_escape(&mut world);
    let start = world.resource::<SettingsPanel>().bounds;

    let grip = world.resource::<SettingsPanel>().resize_grip();
    set_pointer(&mut world, grip.x + 2.0, grip.y + 2.0, true, true);
    tick_panel(&mut world);
    assert!(world.resource::<SettingsPanel>().resizing);

    // drag far beyond the maximum size
    set_pointer(&mut world, start.x + 2000.0, start.y + 2000.0, false, true);
    tick_panel(&mut world);
    let bounds = world.resource::<SettingsPanel>().bounds;
    assert!(approx_eq(bounds.width, 700.0));
    assert!(approx_eq(bounds.height, 400.0));

    // and far below the minimum
    set_pointer(&mut world, start.x + 10.0, start.y + 10.0, false, true);
    tick_panel(&mut world);
    let bounds = world.resource::<SettingsPanel>().bounds;
    assert!(approx_eq(bounds.width, 500.0));
    assert!(approx_eq(bounds.height, 200.0));
}

#[test]
fn closing_menu_releases_any_grab() {
    let mut world = make_menu_world();
    press_escape(&mut world);
    let start = world.resource::<SettingsPanel>().bounds;

    set_pointer(&mut world, start.x + 10.0, start.y + 10.0, true, true);
    tick_panel(&mut world);
    assert!(world.resource::<SettingsPanel>().dragging);

    *world.resource_mut::<MenuState>() = MenuState::Closed;
    tick_panel(&mut world);
    assert!(!world.resource::<SettingsPanel>().dragging);
}

// ==================== HOVER CLAIM ====================

fn tick_hover(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(ui_hover_system);
    schedule.run(world);
}

#[test]
fn header_claims_pointer_but_gamefield_does_not() {
    let mut world = make_world();

    set_pointer(&mut world, 460.0, 20.0, false, false);
    tick_hover(&mut world);
    assert!(world.resource::<UiHover>().hovered);

    set_pointer(&mut world, 460.0, 460.0, false, false);
    tick_hover(&mut world);
    assert!(!world.resource::<UiHover>().hovered);
}

#[test]
fn open_panel_claims_pointer() {
    let mut world = make_menu_world();

    // middle of where the panel will open: free while the menu is closed
    set_pointer(&mut world, 300.0, 400.0, false, false);
    tick_hover(&mut world);
    assert!(!world.resource::<UiHover>().hovered);

    press_escape(&mut world);
    tick_hover(&mut world);
    assert!(world.resource::<UiHover>().hovered);
}

// ==================== CAMERA ====================

#[test]
fn camera_follows_player_position() {
    let mut world = make_world();
    world.insert_resource(ViewCamera(Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 4.0,
    }));
    let entity = spawn_player(&mut world);

    hold_keys(&mut world, false, true, false, true);
    tick_movement(&mut world, 1.0);
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(&mut world);

    let pos = player_pos(&mut world, entity);
    let camera = world.resource::<ViewCamera>().0;
    assert!(approx_eq(camera.target.x, pos.x));
    assert!(approx_eq(camera.target.y, pos.y));
    assert!(approx_eq(camera.zoom, 4.0));
}
