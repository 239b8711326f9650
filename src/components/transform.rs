use bevy_ecs::prelude::Component;

/// Top-left position of an entity in screen units.
///
/// Only the movement system writes to this once the scene is running.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
