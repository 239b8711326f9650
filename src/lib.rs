//! Pongscene library.
//!
//! Simulation core of a small 2D arcade game on top of `bevy_ecs`: a scene
//! with phased systems, movement and bounce physics, sprite animation and a
//! tile map generated from a literal grid or from simplex noise. Drawing goes
//! through the [`surface::DrawSurface`] trait so the whole simulation runs
//! headless.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod noise;
pub mod resources;
pub mod scene;
pub mod surface;
pub mod systems;
