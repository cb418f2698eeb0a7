//! High-level game setup.
//!
//! Loads the demo's assets and spawns the player entity. Everything here
//! runs once, synchronously, before the main loop starts.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemapstore::{Tilemap, TilemapStore};
use crate::systems::render::{TILE_ATLAS_KEY, WORLD_MAP_KEY};

pub const TILE_ATLAS_PATH: &str = "./assets/tiles.png";
pub const WORLD_MAP_PATH: &str = "./assets/map.json";

/// Load the tile atlas and map, then spawn the player.
///
/// Asset failures are fatal: the demo cannot run without its atlas and map,
/// so the process terminates with the cause.
pub fn setup(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let config = world.resource::<GameConfig>().clone();

    let atlas = rl
        .load_texture(thread, TILE_ATLAS_PATH)
        .expect("load assets/tiles.png");
    let mut tex_store = TextureStore::new();
    tex_store.insert(TILE_ATLAS_KEY, atlas);
    world.insert_resource(tex_store);

    let tilemap = Tilemap::load_from_file(WORLD_MAP_PATH).expect("load assets/map.json");
    if tilemap.tile_size != config.tile_size || tilemap.map_width != config.map_width {
        log::warn!(
            "map geometry ({}px, {} wide) differs from configured ({}px, {} wide)",
            tilemap.tile_size,
            tilemap.map_width,
            config.tile_size,
            config.map_width
        );
    }
    let mut tilemap_store = TilemapStore::new();
    tilemap_store.insert(WORLD_MAP_KEY, tilemap);
    world.insert_resource(tilemap_store);

    world.spawn((
        Player,
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        InputControlled::cardinal(config.movement_speed),
    ));

    log::info!("world ready: map '{}', atlas '{}'", WORLD_MAP_KEY, TILE_ATLAS_KEY);
}
