//! Tilemap storage and data types.
//!
//! A tile map is an ordered list of layers, each a flat row-major array of
//! atlas indices of length `map_width * map_height`. Layers composite in
//! declaration order: later layers draw over earlier ones, so no explicit
//! z-sort is needed. Maps are loaded once from JSON at startup and are
//! immutable afterwards.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named tile layer: one atlas index per cell, row-major.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    pub tiles: Vec<u32>,
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a square tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    pub layers: Vec<Tilelayer>,
}

/// One tile blit: atlas source rectangle and world-space destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    pub source: Rectangle,
    pub dest: Rectangle,
}

/// Atlas source rectangle for a tile index, left-to-right, top-to-bottom.
pub fn atlas_source(id: u32, cells_per_row: u32, tile_size: u32) -> Rectangle {
    let ts = tile_size as f32;
    Rectangle {
        x: (id % cells_per_row) as f32 * ts,
        y: (id / cells_per_row) as f32 * ts,
        width: ts,
        height: ts,
    }
}

impl Tilemap {
    /// Load and validate a tilemap from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Tilemap, String> {
        let path = path.as_ref();
        let json_string = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tilemap {}: {}", path.display(), e))?;
        let tilemap: Tilemap = serde_json::from_str(&json_string)
            .map_err(|e| format!("Failed to parse tilemap {}: {}", path.display(), e))?;
        tilemap.validate()?;
        Ok(tilemap)
    }

    /// Check the layer-shape invariant: every layer holds exactly
    /// `map_width * map_height` cells.
    pub fn validate(&self) -> Result<(), String> {
        let expected = (self.map_width * self.map_height) as usize;
        for layer in &self.layers {
            if layer.tiles.len() != expected {
                return Err(format!(
                    "Layer '{}' has {} tiles, expected {} ({}x{})",
                    layer.name,
                    layer.tiles.len(),
                    expected,
                    self.map_width,
                    self.map_height
                ));
            }
        }
        Ok(())
    }

    /// World-space position of cell `index`, row-major.
    pub fn cell_position(&self, index: usize) -> Vector2 {
        let ts = self.tile_size as f32;
        Vector2 {
            x: (index as u32 % self.map_width) as f32 * ts,
            y: (index as u32 / self.map_width) as f32 * ts,
        }
    }

    /// All tile blits in paint order: layers in declaration order, cells
    /// row-major within each layer. Every cell is drawn, including index 0.
    pub fn tile_draws(&self, cells_per_row: u32) -> impl Iterator<Item = TileDraw> + '_ {
        let ts = self.tile_size as f32;
        self.layers.iter().flat_map(move |layer| {
            layer.tiles.iter().enumerate().map(move |(i, &id)| {
                let pos = self.cell_position(i);
                TileDraw {
                    source: atlas_source(id, cells_per_row, self.tile_size),
                    dest: Rectangle {
                        x: pos.x,
                        y: pos.y,
                        width: ts,
                        height: ts,
                    },
                }
            })
        })
    }
}

/// Registry of loaded tilemaps by key.
#[derive(Resource, Debug, Default)]
pub struct TilemapStore {
    pub map: FxHashMap<String, Tilemap>,
}

impl TilemapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TilemapStore {
            map: FxHashMap::default(),
        }
    }
    /// Get a tilemap by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Tilemap> {
        self.map.get(key.as_ref())
    }
    /// Insert a tilemap with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, tilemap: Tilemap) {
        self.map.insert(key.into(), tilemap);
    }
}
