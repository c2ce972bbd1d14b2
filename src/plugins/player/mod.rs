//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: apply velocity to kinematic rigid body
//! - Update: keep the ship inside the arena
//!
//! Axes are resolved with `else if`: Left wins over Right and Up wins over Down,
//! while one horizontal plus one vertical key gives a full-speed diagonal.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::silhouette::{Role, Silhouette};
use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

#[derive(Component)]
pub struct Player;

/// Input sampled once per frame, in screen-space directions.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    pub move_dir: Vec2,
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::Playing), spawn)
        .add_systems(
            Update,
            (gather_input, clamp_to_arena).run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(in_state(GameState::Playing)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Enemy, Layer::PowerUp]);
    let size = tunables.player_size;
    let pos = tunables.to_world(tunables.player_spawn);

    commands.spawn((
        Name::new("Player"),
        Player,
        Silhouette::square(Role::Ship, size),
        Transform::from_translation(pos.extend(1.0)),
        Visibility::Visible,
        RigidBody::Kinematic,
        Collider::rectangle(size, size),
        layers,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::Playing),
    ));
}

/// Left/Right and Up/Down are each mutually exclusive, first key wins.
pub fn resolve_input(left: bool, right: bool, up: bool, down: bool, fire: bool) -> PlayerInput {
    let x = if left {
        -1.0
    } else if right {
        1.0
    } else {
        0.0
    };
    let y = if up {
        -1.0
    } else if down {
        1.0
    } else {
        0.0
    };
    PlayerInput { move_dir: Vec2::new(x, y), fire }
}

pub fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    *input = resolve_input(
        keys.pressed(KeyCode::ArrowLeft),
        keys.pressed(KeyCode::ArrowRight),
        keys.pressed(KeyCode::ArrowUp),
        keys.pressed(KeyCode::ArrowDown),
        keys.pressed(KeyCode::Space),
    );
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = tunables.velocity_to_world(input.move_dir * tunables.player_speed);
}

/// Kinematic bodies ignore walls, so the arena bound is enforced here.
fn clamp_to_arena(
    tunables: Res<Tunables>,
    mut q_player: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let Ok((mut tf, mut vel)) = q_player.single_mut() else {
        return;
    };

    let limit = tunables.half_extents() - Vec2::splat(tunables.player_size * 0.5);
    let pos = tf.translation.truncate();
    let clamped = pos.clamp(-limit, limit);
    if clamped == pos {
        return;
    }

    if clamped.x != pos.x {
        vel.x = 0.0;
    }
    if clamped.y != pos.y {
        vel.y = 0.0;
    }
    tf.translation.x = clamped.x;
    tf.translation.y = clamped.y;
}
