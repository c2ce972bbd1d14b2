//! Power-ups: rare heal pickups drifting down from the top edge.
//!
//! Collection is handled in `combat`. Power-ups outlive the `Playing` state so they
//! stay frozen on the game-over screen, and are removed when `GameOver` exits.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::despawn::PendingDespawn;
use crate::common::layers::Layer;
use crate::common::rng::GameRng;
use crate::common::silhouette::{Role, Silhouette};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

/// A draw in `0..=500` below 2 spawns one.
const SPAWN_ROLL: (i32, i32) = (500, 2);
const SPAWN_X: (i32, i32) = (50, 750);
const SPAWN_Y: f32 = 50.0;
pub const POWER_UP_SIZE: f32 = 20.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub heal: i32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (spawn_power_ups, cull_fallen_power_ups).run_if(in_state(GameState::Playing)),
    );
}

pub fn spawn_power_up(commands: &mut Commands, tunables: &Tunables, screen_x: f32) -> Entity {
    let pos = tunables.to_world(Vec2::new(screen_x, SPAWN_Y));
    let vel = tunables.velocity_to_world(Vec2::new(0.0, tunables.power_up_speed));

    commands
        .spawn((
            Name::new("PowerUp"),
            PowerUp { heal: tunables.power_up_heal },
            Silhouette::square(Role::PowerUp, POWER_UP_SIZE),
            Transform::from_translation(pos.extend(1.0)),
            Visibility::Visible,
            // Dynamic sensor so the kinematic ship still reports the overlap.
            RigidBody::Dynamic,
            Sensor,
            Mass(1.0),
            Collider::circle(POWER_UP_SIZE * 0.5),
            CollisionLayers::new(Layer::PowerUp, [Layer::Player]),
            CollisionEventsEnabled,
            LinearVelocity(vel),
            DespawnOnExit(GameState::GameOver),
        ))
        .id()
}

fn spawn_power_ups(mut commands: Commands, tunables: Res<Tunables>, mut rng: ResMut<GameRng>) {
    if !rng.chance(SPAWN_ROLL.0, SPAWN_ROLL.1) {
        return;
    }
    let x = rng.between(SPAWN_X.0, SPAWN_X.1) as f32;
    debug!("power-up dropped at x={x}");
    spawn_power_up(&mut commands, &tunables, x);
}

/// Anything that has fully left through the bottom edge is gone for good.
fn cull_fallen_power_ups(
    mut commands: Commands,
    tunables: Res<Tunables>,
    q: Query<(Entity, &Transform), (With<PowerUp>, Without<PendingDespawn>)>,
) {
    let floor = -tunables.half_extents().y - POWER_UP_SIZE;
    for (e, tf) in &q {
        if tf.translation.y < floor {
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

#[cfg(test)]
mod tests;
