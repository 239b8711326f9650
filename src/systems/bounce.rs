//! Bounce response.
//!
//! Consumes the [`Collider`] flags set by
//! [`collision_detection`](crate::systems::collision::collision_detection).
//! Must be registered after it so both run in the same frame.
use bevy_ecs::prelude::*;

use crate::components::collider::Collider;
use crate::components::speed::Speed;
use crate::components::transform::Transform;
use crate::systems::movement::scale_velocity;

/// Vertical velocity multiplier applied on a collider bounce.
pub const BOUNCE_RESTITUTION: f64 = -1.5;

/// Reverse and amplify the vertical speed of every triggered collider, add the
/// transferred horizontal speed, and clear the trigger.
pub fn bounce(mut query: Query<(&mut Speed, &mut Collider), With<Transform>>) {
    for (mut speed, mut collider) in query.iter_mut() {
        if !collider.triggered {
            continue;
        }
        speed.y = scale_velocity(speed.y, BOUNCE_RESTITUTION);
        speed.x = speed.x.saturating_add(collider.transfer_speed);
        collider.clear();
    }
}
