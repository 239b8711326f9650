//! Input event systems.
//!
//! Event systems receive one [`InputEvent`] per call, in queue order, before
//! the update phase of the frame.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::player::Player;
use crate::components::speed::Speed;
use crate::events::input::{InputAction, InputEvent};

/// Translate key presses into horizontal speed on player entities.
///
/// - press Right: `speed.x = move_speed`
/// - press Left: `speed.x = -move_speed`
/// - any release: `speed.x = 0`
///
/// Vertical speed is never touched, and presses of other actions are ignored.
pub fn player_input(In(event): In<InputEvent>, mut query: Query<(&mut Speed, &Player)>) {
    for (mut speed, player) in query.iter_mut() {
        if event.pressed {
            match event.action {
                InputAction::Right => speed.x = player.move_speed,
                InputAction::Left => speed.x = -player.move_speed,
                _ => {}
            }
        } else {
            speed.x = 0;
        }
    }
    debug!("Handled {:?}", event);
}
