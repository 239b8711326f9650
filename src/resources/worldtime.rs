//! Simulation time resource.
//!
//! The scene advances [`WorldTime`] once per frame before the update phase,
//! so update systems read the frame delta from here instead of taking it as
//! an argument.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of scaled simulation time since the scene started running.
    pub elapsed: f32,
    /// Scaled delta of the current frame in seconds.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames run so far, including the current one.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
