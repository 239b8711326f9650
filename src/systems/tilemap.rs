//! Tile-map generation setup systems.
//!
//! Two generators fill the world [`TileMap`]:
//!
//! - [`literal_tilemap_setup`] copies a fixed [`TileLayout`] grid.
//! - [`noise_tilemap_setup`] classifies simplex noise samples into water and
//!   grass using [`NoiseMapSettings`] and an offset drawn from
//!   [`NoiseOffset`].
//!
//! Both load the grass and water textures while building the map. Register
//! them with [`tilemap_teardown`] as their teardown hook so the textures are
//! released when the scene ends.

use bevy_ecs::prelude::*;
use log::info;

use crate::error::{Result, SceneError};
use crate::noise::{self, DEFAULT_SEED};
use crate::resources::offset::NoiseOffset;
use crate::resources::texturestore::{TextureHandle, TextureStore};
use crate::resources::tilemap::{
    GRASS_TEXTURE, NoiseMapSettings, Tile, TileKind, TileLayout, TileMap, WATER_TEXTURE,
    cell_count,
};

/// Classify a literal layout. Fails on the first unknown code.
pub fn literal_kinds(layout: &TileLayout) -> Result<Vec<TileKind>> {
    let expected = cell_count(layout.width, layout.height);
    if layout.cells.len() != expected {
        return Err(SceneError::LayoutSize {
            len: layout.cells.len(),
            width: layout.width,
            height: layout.height,
        });
    }
    layout
        .cells
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            TileKind::from_code(code).ok_or(SceneError::UnknownTileCode { code, index })
        })
        .collect()
}

/// Height of cell `(x, y)` in `[0, 1]` for a given offset.
pub fn noise_height(settings: &NoiseMapSettings, offset: (f32, f32), x: u32, y: u32) -> f32 {
    let frequency = settings.scale * settings.frequency;
    let sx = (x as f32 + offset.0) * frequency;
    let sy = (y as f32 + offset.1) * frequency;
    noise::to_unit(noise::simplex_2d(sx, sy, DEFAULT_SEED))
}

/// Classify every cell of a noise map, row-major.
///
/// Pure function of `settings` and `offset`.
pub fn generate_noise_kinds(settings: &NoiseMapSettings, offset: (f32, f32)) -> Vec<TileKind> {
    let mut kinds = Vec::with_capacity(cell_count(settings.width, settings.height));
    for y in 0..settings.height {
        for x in 0..settings.width {
            if noise_height(settings, offset, x, y) < settings.water_threshold {
                kinds.push(TileKind::Water);
            } else {
                kinds.push(TileKind::Grass);
            }
        }
    }
    kinds
}

fn load_tile_textures(textures: &mut TextureStore) -> Result<(TextureHandle, TextureHandle)> {
    let grass = textures.load(GRASS_TEXTURE, None)?;
    let water = textures.load(WATER_TEXTURE, None)?;
    Ok((grass, water))
}

fn build_tilemap(
    kinds: Vec<TileKind>,
    textures: (TextureHandle, TextureHandle),
    width: u32,
    height: u32,
    tile_size: u32,
) -> TileMap {
    let (grass, water) = textures;
    let tiles = kinds
        .into_iter()
        .map(|kind| Tile {
            kind,
            texture: match kind {
                TileKind::Grass => grass,
                TileKind::Water => water,
            },
        })
        .collect();
    TileMap::new(tiles, width, height, tile_size)
}

/// Build the world tile map from the [`TileLayout`] resource, or the 2x2
/// starter layout when none is installed.
pub fn literal_tilemap_setup(
    mut commands: Commands,
    layout: Option<Res<TileLayout>>,
    mut textures: ResMut<TextureStore>,
) -> Result<()> {
    let layout = layout.as_deref().cloned().unwrap_or_default();
    let kinds = literal_kinds(&layout)?;
    let handles = load_tile_textures(&mut textures)?;
    let tilemap = build_tilemap(kinds, handles, layout.width, layout.height, layout.tile_size);
    info!(
        "Literal tile map {}x{}: {} water tiles",
        tilemap.map_width,
        tilemap.map_height,
        tilemap.count(TileKind::Water)
    );
    commands.insert_resource(tilemap);
    Ok(())
}

/// Build the world tile map from simplex noise.
///
/// Uses the [`NoiseMapSettings`] and [`NoiseOffset`] resources when present,
/// defaults otherwise (a default offset source draws from OS entropy).
pub fn noise_tilemap_setup(
    mut commands: Commands,
    settings: Option<Res<NoiseMapSettings>>,
    offset: Option<ResMut<NoiseOffset>>,
    mut textures: ResMut<TextureStore>,
) -> Result<()> {
    let settings = settings.as_deref().copied().unwrap_or_default();
    let offset = match offset {
        Some(mut source) => source.next_offset(),
        None => NoiseOffset::default().next_offset(),
    };
    let handles = load_tile_textures(&mut textures)?;
    let kinds = generate_noise_kinds(&settings, offset);
    let tilemap = build_tilemap(
        kinds,
        handles,
        settings.width,
        settings.height,
        settings.tile_size,
    );
    info!(
        "Noise tile map {}x{} at offset ({:.1}, {:.1}): {} water / {} grass",
        tilemap.map_width,
        tilemap.map_height,
        offset.0,
        offset.1,
        tilemap.count(TileKind::Water),
        tilemap.count(TileKind::Grass)
    );
    commands.insert_resource(tilemap);
    Ok(())
}

/// Release the tile textures loaded by either generator.
pub fn tilemap_teardown(mut textures: ResMut<TextureStore>) {
    textures.unload(GRASS_TEXTURE);
    textures.unload(WATER_TEXTURE);
}
