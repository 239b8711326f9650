//! Random offset source for noise map generation.
//!
//! The noise generator is a pure function of its settings and an
//! `(x, y)` offset. All randomness lives here so a test can swap
//! [`RandomOffset`] for a [`FixedOffset`] and assert exact tiles.

use bevy_ecs::prelude::Resource;

/// Offsets are drawn uniformly from `[-OFFSET_RANGE, OFFSET_RANGE)`.
pub const OFFSET_RANGE: f64 = 100_000.0;

pub trait OffsetSource: Send + Sync {
    fn next_offset(&mut self) -> (f32, f32);
}

/// Uniform offsets from a `fastrand` generator.
#[derive(Debug, Clone)]
pub struct RandomOffset {
    rng: fastrand::Rng,
}

impl RandomOffset {
    /// Seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn draw(&mut self) -> f32 {
        (self.rng.f64() * 2.0 * OFFSET_RANGE - OFFSET_RANGE) as f32
    }
}

impl OffsetSource for RandomOffset {
    fn next_offset(&mut self) -> (f32, f32) {
        let x = self.draw();
        let y = self.draw();
        (x, y)
    }
}

/// Always returns the same offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffset(pub f32, pub f32);

impl OffsetSource for FixedOffset {
    fn next_offset(&mut self) -> (f32, f32) {
        (self.0, self.1)
    }
}

/// Resource wrapper holding the active source.
#[derive(Resource)]
pub struct NoiseOffset(Box<dyn OffsetSource>);

impl NoiseOffset {
    pub fn new(source: impl OffsetSource + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn next_offset(&mut self) -> (f32, f32) {
        self.0.next_offset()
    }
}

impl Default for NoiseOffset {
    fn default() -> Self {
        Self::new(RandomOffset::from_entropy())
    }
}
