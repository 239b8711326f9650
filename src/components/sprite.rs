//! Sprite components.
//!
//! Both variants identify their texture by asset path plus an optional shader
//! variant name; the [`TextureStore`](crate::resources::texturestore::TextureStore)
//! resolves the pair to a handle at render time.
//!
//! - [`SimpleSprite`] – one static texture.
//! - [`Sprite`] – a sprite sheet with frame-timed playback along the x axis.
use bevy_ecs::prelude::Component;

/// A single static texture.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SimpleSprite {
    pub name: String,
    pub shader: Option<String>,
}

impl SimpleSprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: None,
        }
    }

    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = Some(shader.into());
        self
    }
}

/// Animated sprite sheet.
///
/// `x_index` walks through `animation_frames` columns of the sheet and is
/// always kept below `animation_frames`. An `animation_duration` of zero
/// means the sprite is static and the animation system leaves it alone.
/// `last_update` is the clock time in milliseconds of the last frame advance.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub shader: Option<String>,
    pub animation_frames: u32,
    pub animation_duration: u32,
    pub x_index: u32,
    pub y_index: u32,
    pub last_update: u64,
}

impl Sprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: None,
            animation_frames: 1,
            animation_duration: 0,
            x_index: 0,
            y_index: 0,
            last_update: 0,
        }
    }

    /// Sprite sheet with `frames` columns played over `duration_ms`.
    ///
    /// # Panics
    /// Panics if `frames` is zero or the starting `x_index` is out of range.
    pub fn animated(
        name: impl Into<String>,
        frames: u32,
        duration_ms: u32,
        x_index: u32,
        y_index: u32,
    ) -> Self {
        assert!(frames > 0, "sprite sheet needs at least one frame");
        assert!(
            x_index < frames,
            "x_index {x_index} out of range for {frames} frames"
        );
        Self {
            animation_frames: frames,
            animation_duration: duration_ms,
            x_index,
            y_index,
            ..Self::new(name)
        }
    }

    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = Some(shader.into());
        self
    }

    pub fn is_animated(&self) -> bool {
        self.animation_duration > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sprite_is_static_single_frame() {
        let sprite = Sprite::new("Sprites/Cat/1.png");
        assert_eq!(sprite.animation_frames, 1);
        assert!(!sprite.is_animated());
        assert_eq!(sprite.x_index, 0);
    }

    #[test]
    fn animated_sets_sheet_layout() {
        let sprite = Sprite::animated("Sprites/Cat/SpriteSheet.png", 8, 5000, 3, 1);
        assert!(sprite.is_animated());
        assert_eq!(sprite.animation_frames, 8);
        assert_eq!(sprite.x_index, 3);
        assert_eq!(sprite.y_index, 1);
    }

    #[test]
    #[should_panic]
    fn animated_rejects_out_of_range_index() {
        let _ = Sprite::animated("sheet.png", 4, 1000, 4, 0);
    }

    #[test]
    fn shader_variant_is_optional() {
        let plain = SimpleSprite::new("cat.png");
        let tinted = SimpleSprite::new("cat.png").with_shader("sampleShader");
        assert_eq!(plain.shader, None);
        assert_eq!(tinted.shader.as_deref(), Some("sampleShader"));
    }
}
