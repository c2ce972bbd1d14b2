//! World plugin: walls around the screen-sized arena.
//!
//! Enemies bounce off them; bullets and power-ups pass through and are culled
//! once they leave the arena.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

const WALL_THICKNESS: f32 = 30.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Wall;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_arena);
}

fn spawn_arena(mut commands: Commands, tunables: Res<Tunables>) {
    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy]);
    let half = tunables.half_extents();
    let t = WALL_THICKNESS;

    // Perfectly elastic so bouncing enemies keep their speed.
    let restitution = Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max);

    let mut spawn_wall = |name: &str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_string()),
            Wall,
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            restitution,
            Friction::ZERO,
            DespawnOnExit(GameState::Playing),
        ));
    };

    spawn_wall(
        "WallTop",
        Vec2::new(0.0, half.y + t * 0.5),
        Vec2::new(half.x * 2.0 + t * 2.0, t),
    );
    spawn_wall(
        "WallBottom",
        Vec2::new(0.0, -half.y - t * 0.5),
        Vec2::new(half.x * 2.0 + t * 2.0, t),
    );
    spawn_wall(
        "WallLeft",
        Vec2::new(-half.x - t * 0.5, 0.0),
        Vec2::new(t, half.y * 2.0),
    );
    spawn_wall(
        "WallRight",
        Vec2::new(half.x + t * 0.5, 0.0),
        Vec2::new(t, half.y * 2.0),
    );
}
