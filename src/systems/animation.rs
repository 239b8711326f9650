//! Sprite animation timing.
//!
//! Frames advance against the [`Clock`] rather than the frame delta, so the
//! animation speed is independent of the frame rate. A sprite's cycle is
//! treated as 60 logical ticks regardless of how many frames its sheet has:
//! one sheet column is shown per tick of `animation_duration / 60` ms.
//!
//! # Related
//!
//! - [`crate::components::sprite::Sprite`] – per-entity sheet and timing state
//! - [`crate::resources::clock::Clock`] – time source in milliseconds

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::clock::Clock;

/// Logical ticks per animation cycle.
pub const TICKS_PER_CYCLE: f32 = 60.0;

/// Seconds per sheet column for an animation lasting `duration_ms`.
pub fn frame_duration(duration_ms: u32) -> f32 {
    (duration_ms as f32 / 1000.0) / TICKS_PER_CYCLE
}

/// Whole columns to advance after `elapsed_secs`.
pub fn frames_elapsed(elapsed_secs: f32, duration_ms: u32) -> u32 {
    (elapsed_secs / frame_duration(duration_ms)) as u32
}

/// Advance every animated sprite by the columns elapsed since its last update.
///
/// Contract
/// - Sprites with `animation_duration == 0` are skipped.
/// - `x_index` wraps modulo `animation_frames`.
/// - `last_update` is reset to now only when at least one column advanced, so
///   partial ticks keep accumulating.
pub fn sprite_animation(mut query: Query<&mut Sprite>, clock: Res<Clock>) {
    let now = clock.now_ms();
    for mut sprite in query.iter_mut() {
        if !sprite.is_animated() {
            continue;
        }
        let elapsed = now.saturating_sub(sprite.last_update) as f32 / 1000.0;
        let frames = frames_elapsed(elapsed, sprite.animation_duration);
        if frames > 0 {
            let count = sprite.animation_frames.max(1);
            sprite.x_index = ((sprite.x_index as u64 + frames as u64) % count as u64) as u32;
            sprite.last_update = now;
        }
    }
}
