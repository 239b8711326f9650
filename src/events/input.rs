//! Input action events.
//!
//! The platform layer translates raw key presses into [`InputEvent`]s and
//! queues them for the next frame. The scene hands each queued event to every
//! registered event system before the update phase runs.

/// Enumeration of logical input actions.
///
/// These abstract the physical keys into gameplay-meaningful actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move left (default: Left arrow).
    Left,
    /// Move right (default: Right arrow).
    Right,
    /// Primary action button (default: Space).
    Action,
    /// Back/cancel action (default: Escape).
    Back,
}

/// A key press or release.
///
/// `pressed` is true for a press and false for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(action: InputAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn release(action: InputAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}
