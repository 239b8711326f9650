use bevy_ecs::prelude::Component;

/// Integer velocity in units per second along each axis.
///
/// `(0, 0)` means the entity is at rest; the movement system skips it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Speed {
    pub x: i32,
    pub y: i32,
}

impl Speed {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}
