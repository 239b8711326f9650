//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and [`Clock`](crate::resources::clock::Clock) resources once per frame,
//! before the update phase.
use bevy_ecs::prelude::*;

use crate::resources::clock::Clock;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
/// A manual [`Clock`] advances by the unscaled delta, since it stands in for
/// wall time.
pub fn update_world_time(world: &mut World, dt: f32) {
    {
        let mut wt = world.resource_mut::<WorldTime>();
        let scaled_dt = dt * wt.time_scale;
        wt.elapsed += scaled_dt;
        wt.delta = scaled_dt;
        wt.frame_count += 1;
    }
    if let Some(mut clock) = world.get_resource_mut::<Clock>() {
        clock.advance(dt);
    }
}
