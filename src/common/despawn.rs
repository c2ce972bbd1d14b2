//! Deferred despawn.
//!
//! Gameplay rules never despawn inside the fixed step. They mark the entity and
//! `despawn_marked` removes it in `PostUpdate`, after every fixed-step reader is done.

use bevy::prelude::*;

/// Marker: entity should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Despawn entities marked for removal.
///
/// `try_despawn` because a state exit may already have removed a marked entity.
pub fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).try_despawn();
    }
}
