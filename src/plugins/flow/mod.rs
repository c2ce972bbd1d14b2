//! Session flow: `Playing` -> `GameOver` -> `Playing`.
//!
//! - Defeat is detected in `Update` once health reaches zero.
//! - Entering `GameOver` pauses virtual time, so physics and every timer freeze.
//! - A left click or Enter on the game-over screen starts a new session.
//! - Entering `Playing` resets the session and resumes time. The rest of the new
//!   session (player, arena, enemies, bullet pool) is rebuilt by each plugin's own
//!   `OnEnter(Playing)` system.

use bevy::prelude::*;

use crate::common::session::Session;
use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), begin_session)
        .add_systems(OnEnter(GameState::GameOver), freeze_world)
        .add_systems(
            Update,
            check_for_defeat.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            restart_on_input.run_if(in_state(GameState::GameOver)),
        );
}

fn begin_session(mut session: ResMut<Session>, mut time: ResMut<Time<Virtual>>) {
    session.reset();
    time.unpause();
    info!("session started");
}

fn freeze_world(session: Res<Session>, mut time: ResMut<Time<Virtual>>) {
    time.pause();
    info!("game over: score {}", session.score());
}

pub fn check_for_defeat(session: Res<Session>, mut next: ResMut<NextState<GameState>>) {
    if session.is_over() || session.health() <= 0 {
        next.set(GameState::GameOver);
    }
}

pub fn restart_on_input(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let click = mouse.is_some_and(|m| m.just_pressed(MouseButton::Left));
    let enter = keys.is_some_and(|k| k.just_pressed(KeyCode::Enter));
    if click || enter {
        next.set(GameState::Playing);
    }
}

#[cfg(test)]
mod tests;
