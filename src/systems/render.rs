//! Render systems.
//!
//! Render systems read gameplay state and push [`DrawRequest`]s into the
//! [`DrawQueue`]; they never mutate components. The scene drains the queue
//! into the draw surface once the render phase is over, so requests reach
//! the backend in registration order of the systems that pushed them.
//!
//! Textures must have been loaded during setup. A sprite whose texture is
//! missing from the [`TextureStore`] is a setup bug and panics.
use bevy_ecs::prelude::*;

use crate::components::size::Size;
use crate::components::sprite::{SimpleSprite, Sprite};
use crate::components::transform::Transform;
use crate::resources::drawqueue::{ClipRect, DrawQueue, DrawRequest};
use crate::resources::texturestore::{TextureHandle, TextureStore};
use crate::resources::tilemap::TileMap;

/// On-screen edge length of a static sprite.
pub const SIMPLE_SPRITE_SIZE: i32 = 100;
/// Edge length of one cell in an animated sprite sheet.
pub const SHEET_CELL_SIZE: i32 = 48;
/// On-screen edge length of an animated sprite.
pub const ANIMATED_SPRITE_SIZE: i32 = 300;

fn texture_for(textures: &TextureStore, name: &str, shader: Option<&str>) -> TextureHandle {
    textures.get(name, shader).unwrap_or_else(|| {
        panic!("texture {name} ({shader:?}) was not loaded during setup")
    })
}

/// Filled rectangle for every entity with a bounding box.
pub fn rect_render(query: Query<(&Transform, &Size)>, mut queue: ResMut<DrawQueue>) {
    for (transform, size) in query.iter() {
        queue.push(DrawRequest::rect(
            transform.x as i32,
            transform.y as i32,
            size.w,
            size.h,
        ));
    }
}

pub fn simple_sprite_render(
    query: Query<(&Transform, &SimpleSprite)>,
    textures: Res<TextureStore>,
    mut queue: ResMut<DrawQueue>,
) {
    for (transform, sprite) in query.iter() {
        let texture = texture_for(&textures, &sprite.name, sprite.shader.as_deref());
        queue.push(DrawRequest::texture(
            texture,
            transform.x as i32,
            transform.y as i32,
            SIMPLE_SPRITE_SIZE,
            SIMPLE_SPRITE_SIZE,
        ));
    }
}

/// Draw the current sheet cell of every animated sprite.
pub fn sprite_render(
    query: Query<(&Transform, &Sprite)>,
    textures: Res<TextureStore>,
    mut queue: ResMut<DrawQueue>,
) {
    for (transform, sprite) in query.iter() {
        let texture = texture_for(&textures, &sprite.name, sprite.shader.as_deref());
        let clip = ClipRect::new(
            sprite.x_index as i32 * SHEET_CELL_SIZE,
            sprite.y_index as i32 * SHEET_CELL_SIZE,
            SHEET_CELL_SIZE,
            SHEET_CELL_SIZE,
        );
        queue.push(
            DrawRequest::texture(
                texture,
                transform.x as i32,
                transform.y as i32,
                ANIMATED_SPRITE_SIZE,
                ANIMATED_SPRITE_SIZE,
            )
            .with_clip(clip),
        );
    }
}

/// Draw the world tile map row by row from the top-left corner.
///
/// Requires the [`TileMap`] resource; running it before a tile-map setup
/// system has installed one is a precondition violation.
pub fn tilemap_render(tilemap: Res<TileMap>, mut queue: ResMut<DrawQueue>) {
    let size = tilemap.tile_size as i32;
    let clip = ClipRect::new(0, 0, size, size);
    for y in 0..tilemap.map_height {
        for x in 0..tilemap.map_width {
            let Some(tile) = tilemap.get(x, y) else {
                continue;
            };
            queue.push(
                DrawRequest::texture(tile.texture, x as i32 * size, y as i32 * size, size, size)
                    .with_clip(clip),
            );
        }
    }
}
