//! Collision detection between colliders and movers.
//!
//! Every entity with a [`Collider`] is tested against every entity that can
//! move (has [`Speed`]). There is no broad phase; the cost is
//! colliders × movers per frame.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::collider::{Aabb, Collider};
use crate::components::size::Size;
use crate::components::speed::Speed;
use crate::components::transform::Transform;

/// Flag colliders that overlap a mover this frame.
///
/// On overlap the collider records the mover's horizontal speed as its
/// transfer speed. When several movers overlap the same collider, the last
/// one visited wins. An entity is never tested against itself, and a
/// collider that overlaps nothing keeps whatever state it already had.
pub fn collision_detection(
    mut colliders: Query<(Entity, &Transform, &Size, &mut Collider)>,
    movers: Query<(Entity, &Transform, &Speed, &Size)>,
) {
    for (entity, transform, size, mut collider) in colliders.iter_mut() {
        let box_a = Aabb::from_parts(transform, size);
        for (other, other_transform, other_speed, other_size) in movers.iter() {
            if entity == other {
                continue;
            }
            let box_b = Aabb::from_parts(other_transform, other_size);
            if box_a.intersects(&box_b) {
                trace!("{entity:?} hit by {other:?} moving at {}", other_speed.x);
                collider.trigger(other_speed.x);
            }
        }
    }
}
