//! Global state machine.
//!
//! ```text
//! Playing --(health <= 0)--> GameOver --(click / Enter)--> Playing
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}
