//! World tile map and the inputs used to generate it.
//!
//! [`TileMap`] is the scene's single piece of world-scoped state. It is
//! inserted exactly once by a tile-map setup system; read it through
//! [`Scene::tilemap`](crate::scene::Scene::tilemap) or `Res<TileMap>`.
//!
//! [`TileLayout`] feeds the literal generator and [`NoiseMapSettings`] the
//! noise generator. Both are plain resources installed before setup runs.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::resources::texturestore::TextureHandle;

/// Asset path of the grass tile texture.
pub const GRASS_TEXTURE: &str = "Tiles/Grass.png";
/// Asset path of the water tile texture.
pub const WATER_TEXTURE: &str = "Tiles/Water.png";

/// Terrain category of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Grass,
    Water,
}

impl TileKind {
    /// Map a literal layout code. `0` is grass, `1` is water.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TileKind::Grass),
            1 => Some(TileKind::Water),
            _ => None,
        }
    }

    pub fn texture_path(&self) -> &'static str {
        match self {
            TileKind::Grass => GRASS_TEXTURE,
            TileKind::Water => WATER_TEXTURE,
        }
    }
}

/// One cell: its category and the texture drawn for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub texture: TextureHandle,
}

/// Cells in a `width` x `height` grid, computed without overflowing `u32`.
pub fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Row-major grid of tiles.
///
/// Invariant: `tiles.len() == map_width * map_height`; cell `(x, y)` is at
/// `y * map_width + x`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    pub map_width: u32,
    pub map_height: u32,
    /// Edge length of a tile in pixels.
    pub tile_size: u32,
}

impl TileMap {
    /// # Panics
    /// Panics if `tiles` does not hold exactly `map_width * map_height` cells.
    pub fn new(tiles: Vec<Tile>, map_width: u32, map_height: u32, tile_size: u32) -> Self {
        assert_eq!(
            tiles.len(),
            cell_count(map_width, map_height),
            "tile count does not match a {map_width}x{map_height} map"
        );
        Self {
            tiles,
            map_width,
            map_height,
            tile_size,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        if x >= self.map_width || y >= self.map_height {
            return None;
        }
        self.tiles
            .get(y as usize * self.map_width as usize + x as usize)
    }

    pub fn kinds(&self) -> Vec<TileKind> {
        self.tiles.iter().map(|tile| tile.kind).collect()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }
}

/// Fixed integer grid for the literal generator.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    pub cells: Vec<u32>,
}

fn default_tile_size() -> u32 {
    16
}

impl Default for TileLayout {
    /// The 2x2 starter map: grass on top, water bottom-left.
    fn default() -> Self {
        Self {
            width: 2,
            height: 2,
            tile_size: default_tile_size(),
            cells: vec![0, 0, 1, 0],
        }
    }
}

impl TileLayout {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Parameters of the noise generator.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct NoiseMapSettings {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    /// Zoom applied to the offset coordinates. Larger values give smaller
    /// features.
    pub scale: f32,
    /// Heights below this become water.
    pub water_threshold: f32,
    /// Base frequency of the noise function.
    pub frequency: f32,
}

impl Default for NoiseMapSettings {
    fn default() -> Self {
        Self {
            width: 50,
            height: 38,
            tile_size: 16,
            scale: 2.0,
            water_threshold: 0.3,
            frequency: 0.01,
        }
    }
}
