//! Event types consumed by the engine.
//!
//! Events are queued by the owning application and dispatched by the
//! [`Scene`](crate::scene::Scene) to every registered event system, once per
//! event, before the update phase of the frame.
//!
//! Submodules:
//! - [`input`] – logical key press/release events
pub mod input;
