//! ECS components for entities.
//!
//! This module groups all component types that can be attached to gameplay
//! entities. Entity names use [`bevy_ecs::name::Name`] directly.
//!
//! Submodules overview:
//! - [`collider`] – per-frame collision flag and the integer AABB helper
//! - [`player`] – keyboard-driven horizontal movement speed
//! - [`size`] – bounding box dimensions
//! - [`speed`] – integer velocity in units per second
//! - [`sprite`] – static and animated sprite textures
//! - [`transform`] – top-left position of an entity

pub mod collider;
pub mod player;
pub mod size;
pub mod speed;
pub mod sprite;
pub mod transform;
