//! Sprite texture loading.
//!
//! [`sprite_assets_setup`] loads the texture of every [`SimpleSprite`] and
//! [`Sprite`] present at setup time, including its shader variant.
//! [`sprite_assets_teardown`] is its paired teardown hook.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::sprite::{SimpleSprite, Sprite};
use crate::error::Result;
use crate::resources::texturestore::TextureStore;

pub fn sprite_assets_setup(
    simple: Query<&SimpleSprite>,
    animated: Query<&Sprite>,
    mut textures: ResMut<TextureStore>,
) -> Result<()> {
    for sprite in simple.iter() {
        textures.load(&sprite.name, sprite.shader.as_deref())?;
    }
    for sprite in animated.iter() {
        textures.load(&sprite.name, sprite.shader.as_deref())?;
    }
    debug!("Sprite textures loaded, {} in store", textures.len());
    Ok(())
}

pub fn sprite_assets_teardown(
    simple: Query<&SimpleSprite>,
    animated: Query<&Sprite>,
    mut textures: ResMut<TextureStore>,
) {
    for sprite in simple.iter() {
        textures.unload(&sprite.name);
    }
    for sprite in animated.iter() {
        textures.unload(&sprite.name);
    }
}
