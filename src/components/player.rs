//! Player-controlled marker.
//!
//! Entities with [`Player`] and a [`Speed`](crate::components::speed::Speed)
//! get their horizontal velocity driven by
//! [`player_input`](crate::systems::input::player_input).

use bevy_ecs::prelude::Component;

/// Horizontal speed applied while a direction key is held.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub move_speed: i32,
}

impl Player {
    pub fn new(move_speed: i32) -> Self {
        Self { move_speed }
    }
}
