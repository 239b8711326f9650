use bevy_ecs::prelude::Component;

/// Width and height of the entity's axis-aligned bounding box.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}
