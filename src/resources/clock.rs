//! Millisecond clock used for sprite animation timing.
//!
//! Animation is timed against wall time rather than the frame delta. In a
//! windowed build the clock reads a monotonic [`Instant`]; headless runs and
//! tests use the manual variant, which the scene advances by each frame's
//! delta and which can also be set directly.

use std::time::Instant;

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub enum Clock {
    /// Real elapsed time since `start`.
    Wall { start: Instant },
    /// Simulated time in milliseconds.
    Manual { elapsed_ms: f64 },
}

impl Default for Clock {
    fn default() -> Self {
        Clock::manual()
    }
}

impl Clock {
    pub fn wall() -> Self {
        Clock::Wall {
            start: Instant::now(),
        }
    }

    pub fn manual() -> Self {
        Clock::Manual { elapsed_ms: 0.0 }
    }

    /// Current time in whole milliseconds.
    pub fn now_ms(&self) -> u64 {
        match self {
            Clock::Wall { start } => start.elapsed().as_millis() as u64,
            Clock::Manual { elapsed_ms } => *elapsed_ms as u64,
        }
    }

    /// Move a manual clock forward by `dt` seconds. Wall clocks ignore this.
    pub fn advance(&mut self, dt: f32) {
        if let Clock::Manual { elapsed_ms } = self {
            *elapsed_ms += f64::from(dt) * 1000.0;
        }
    }

    /// Jump a manual clock to `ms`. Wall clocks ignore this.
    pub fn set_ms(&mut self, ms: u64) {
        if let Clock::Manual { elapsed_ms } = self {
            *elapsed_ms = ms as f64;
        }
    }
}
