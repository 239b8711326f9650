//! Collision components.
//!
//! - [`Collider`] marks an entity that reacts to overlapping movers. The
//!   collision detection system sets it, the bounce system consumes it.
//! - [`Aabb`] is the integer rectangle both systems build from
//!   [`Transform`](crate::components::transform::Transform) and
//!   [`Size`](crate::components::size::Size).

use bevy_ecs::prelude::Component;

use crate::components::size::Size;
use crate::components::transform::Transform;

/// Per-frame collision flag plus the horizontal speed picked up from the
/// mover that was hit.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collider {
    pub triggered: bool,
    pub transfer_speed: i32,
}

impl Collider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit. A later hit in the same frame overwrites the earlier one.
    pub fn trigger(&mut self, transfer_speed: i32) {
        self.triggered = true;
        self.transfer_speed = transfer_speed;
    }

    pub fn clear(&mut self) {
        self.triggered = false;
    }
}

/// Axis-aligned box in whole screen units, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of an entity. The position is truncated toward zero.
    pub fn from_parts(transform: &Transform, size: &Size) -> Self {
        Self {
            x: transform.x as i32,
            y: transform.y as i32,
            w: size.w,
            h: size.h,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect,
    /// and an empty box intersects nothing.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(0, 0, 10, 10);
        let b = Aabb::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::new(0, 0, 10, 10);
        let right = Aabb::new(10, 0, 10, 10);
        let below = Aabb::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn contained_box_intersects() {
        let outer = Aabb::new(0, 0, 100, 100);
        let inner = Aabb::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn empty_box_never_intersects() {
        let a = Aabb::new(0, 0, 10, 10);
        let flat = Aabb::new(2, 2, 0, 5);
        let negative = Aabb::new(2, 2, -3, 5);
        assert!(!a.intersects(&flat));
        assert!(!a.intersects(&negative));
    }

    #[test]
    fn from_parts_truncates_position() {
        let aabb = Aabb::from_parts(&Transform::new(10.9, -3.7), &Size::new(4, 6));
        assert_eq!(aabb, Aabb::new(10, -3, 4, 6));
    }

    #[test]
    fn trigger_overwrites_previous_hit() {
        let mut collider = Collider::new();
        collider.trigger(120);
        collider.trigger(-40);
        assert!(collider.triggered);
        assert_eq!(collider.transfer_speed, -40);
        collider.clear();
        assert!(!collider.triggered);
    }
}
