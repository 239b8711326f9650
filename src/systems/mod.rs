//! Engine systems.
//!
//! This module groups the ECS systems a [`Scene`](crate::scene::Scene)
//! registers into its phases.
//!
//! Submodules overview
//! - [`animation`] – advance sprite sheet columns against the clock (update)
//! - [`bounce`] – reflect triggered colliders and transfer speed (update)
//! - [`collision`] – AABB overlap between colliders and movers (update)
//! - [`input`] – turn key events into player speed (event)
//! - [`movement`] – integrate speed into position, reflect off edges (update)
//! - [`render`] – queue draw requests for shapes, sprites and tiles (render)
//! - [`sprite`] – load and release sprite textures (setup)
//! - [`tilemap`] – literal and noise tile map generation (setup)
//! - [`time`] – advance simulation time and clock before each frame

pub mod animation;
pub mod bounce;
pub mod collision;
pub mod input;
pub mod movement;
pub mod render;
pub mod sprite;
pub mod tilemap;
pub mod time;
