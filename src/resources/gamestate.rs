//! Scene lifecycle state resources.
//!
//! [`GameState`] tracks where the scene is in its lifecycle. Systems never
//! change it directly: they request a transition through [`NextGameState`]
//! and the [`Scene`](crate::scene::Scene) applies it between systems. This is
//! how the movement system ends a round without leaving the frame loop.

use bevy_ecs::prelude::Resource;

/// Discrete lifecycle states of a scene.
///
/// Transitions only move forward: `Constructed → Initialized → Running`,
/// `Running ⇄ RoundOver`, and any state `→ TornDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Systems registered, setup not run yet.
    #[default]
    Constructed,
    /// Setup systems have completed.
    Initialized,
    /// At least one frame has started.
    Running,
    /// An entity crossed the bottom edge. Frames are no-ops until the round
    /// is reset.
    RoundOver,
    /// Teardown hooks have run.
    TornDown,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::Constructed,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next`. The scene applies it after the
    /// currently running system returns.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Take the pending request, leaving [`NextGameStates::Unchanged`].
    pub fn take(&mut self) -> Option<GameStates> {
        match std::mem::take(&mut self.next) {
            NextGameStates::Pending(state) => Some(state),
            NextGameStates::Unchanged => None,
        }
    }
}
