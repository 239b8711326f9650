//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels. The movement system reflects
//! entities off the left, right and top edges and ends the round when an
//! entity crosses the bottom edge.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
