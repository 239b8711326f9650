//! Movement and screen-edge reflection.
//!
//! Integrates [`Speed`] into [`Transform`] in whole screen units and reflects
//! entities off the left, right and top edges. Crossing the bottom edge ends
//! the round.
//!
//! Order inside one entity update matters: the candidate position is
//! computed first, reflection only rewrites the velocity, and the candidate
//! position is committed even on the frame a reflection fired. An entity
//! that crosses an edge therefore sits past it for one frame before the
//! reversed velocity brings it back.
use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::size::Size;
use crate::components::speed::Speed;
use crate::components::transform::Transform;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Velocity multiplier applied when an entity hits a wall or the ceiling.
pub const WALL_RESTITUTION: f64 = -1.2;

/// Scale an integer velocity, truncating toward zero.
pub(crate) fn scale_velocity(v: i32, factor: f64) -> i32 {
    (f64::from(v) * factor) as i32
}

/// Move every entity with a non-zero [`Speed`] and reflect it off the edges.
///
/// Requests [`GameStates::RoundOver`] and stops as soon as one entity's
/// candidate box extends past the bottom of the screen; that entity's
/// position is left untouched.
pub fn movement(
    mut query: Query<(Entity, &mut Transform, &mut Speed, &Size, Option<&Name>)>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut next_state: ResMut<NextGameState>,
) {
    let dt = time.delta;
    for (entity, mut transform, mut speed, size, name) in query.iter_mut() {
        if speed.is_zero() {
            continue;
        }

        let new_x = (transform.x + speed.x as f32 * dt) as i32;
        let new_y = (transform.y + speed.y as f32 * dt) as i32;

        if new_x <= 0 {
            speed.x = scale_velocity(speed.x, WALL_RESTITUTION);
        }
        if new_x.saturating_add(size.w) >= screen.w {
            speed.x = scale_velocity(speed.x, WALL_RESTITUTION);
        }
        if new_y <= 0 {
            speed.y = scale_velocity(speed.y, WALL_RESTITUTION);
        }
        if new_y.saturating_add(size.h) > screen.h {
            let label = name.map(|n| n.as_str().to_string());
            info!(
                "{} crossed the bottom edge at y={}, round over",
                label.unwrap_or_else(|| format!("{entity:?}")),
                new_y
            );
            next_state.set(GameStates::RoundOver);
            return;
        }

        transform.x = new_x as f32;
        transform.y = new_y as f32;
    }
}
