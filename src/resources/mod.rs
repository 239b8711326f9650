//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, lifecycle state, asset
//! handles, the world tile map and configuration.
//!
//! Overview
//! - `clock` – millisecond clock driving sprite animation
//! - `drawqueue` – draw requests collected during the render phase
//! - `gameconfig` – INI-backed settings for the runner and demo scenes
//! - `gamestate` – authoritative and pending scene lifecycle state
//! - `offset` – injectable random offset for noise map generation
//! - `screensize` – playfield dimensions in pixels
//! - `texturestore` – loaded textures keyed by asset path and shader variant
//! - `tilemap` – the world tile map and its generator inputs
//! - `worldtime` – simulation time and delta
pub mod clock;
pub mod drawqueue;
pub mod gameconfig;
pub mod gamestate;
pub mod offset;
pub mod screensize;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;
