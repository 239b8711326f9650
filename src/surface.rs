//! Rendering backend boundary.
//!
//! The scene owns no window or renderer. At the end of every frame it hands
//! the queued [`DrawRequest`]s to whatever implements [`DrawSurface`].

use crate::resources::drawqueue::DrawRequest;

/// Receiver of the frame's draw requests.
pub trait DrawSurface {
    fn draw(&mut self, request: &DrawRequest);
}

/// Surface that keeps every request it receives.
///
/// Used by the headless runner and by tests to inspect what a frame drew.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub requests: Vec<DrawRequest>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw(&mut self, request: &DrawRequest) {
        self.requests.push(*request);
    }
}
