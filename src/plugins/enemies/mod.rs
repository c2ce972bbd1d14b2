//! Enemies plugin: regular drones, one-shot boss encounters, and their wander AI.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live in components/resources:
//!    - `Enemy` carries the kind and its point value.
//!    - `Wander` is the direction-change timer, owned by its enemy.
//!    - `Session.bosses` records which encounters already spawned.
//!
//! 2) RULES mutate facts in predictable places:
//!    - spawners here run once per frame in `Update`.
//!    - collision reactions (in `combat`) mark enemies `PendingDespawn`.
//!
//! 3) LIFETIME follows ownership: despawning an enemy drops its `Wander` timer,
//!    so no timer can fire for an enemy that no longer exists.
//!
//! Spawn rolls are inclusive integer draws from `GameRng`.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::despawn::PendingDespawn;
use crate::common::layers::Layer;
use crate::common::rng::GameRng;
use crate::common::session::{Encounter, Session};
use crate::common::silhouette::{Role, Silhouette};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

/// Regular spawn chance per frame: a draw in `0..=100` below 2.
const REGULAR_SPAWN_ROLL: (i32, i32) = (100, 2);
const SPAWN_X: (i32, i32) = (50, 750);
const SPAWN_Y: f32 = 50.0;
const REGULAR_SIZE: (i32, i32) = (20, 30);
const REGULAR_SPEED: (i32, i32) = (40, 80);
const WANDER_DELAY_MS: (i32, i32) = (1000, 3000);
const WANDER_SPEED: (i32, i32) = (-100, 100);
/// Every encounter enters at the top centre.
const ENCOUNTER_SPAWN: Vec2 = Vec2::new(400.0, 50.0);

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Regular,
    Miniboss1,
    Miniboss2,
    Boss,
}

impl EnemyKind {
    pub fn points(self) -> u32 {
        match self {
            EnemyKind::Regular => 5,
            EnemyKind::Miniboss1 | EnemyKind::Miniboss2 => 100,
            EnemyKind::Boss => 500,
        }
    }

    fn role(self) -> Role {
        match self {
            EnemyKind::Regular => Role::Grunt,
            EnemyKind::Miniboss1 | EnemyKind::Miniboss2 => Role::Miniboss,
            EnemyKind::Boss => Role::Boss,
        }
    }
}

impl From<Encounter> for EnemyKind {
    fn from(e: Encounter) -> Self {
        match e {
            Encounter::Miniboss1 => EnemyKind::Miniboss1,
            Encounter::Miniboss2 => EnemyKind::Miniboss2,
            Encounter::Boss => EnemyKind::Boss,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub points: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        Self { kind, points: kind.points() }
    }
}

/// Direction-change timer. Each firing picks a new horizontal speed and a new delay.
#[derive(Component, Debug, Clone)]
pub struct Wander {
    pub timer: Timer,
}

impl Wander {
    pub fn roll(rng: &mut GameRng) -> Self {
        let ms = rng.between(WANDER_DELAY_MS.0, WANDER_DELAY_MS.1) as u64;
        Self {
            timer: Timer::new(Duration::from_millis(ms), TimerMode::Once),
        }
    }
}

// -----------------------------------------------------------------------------
// Spawn parameters
// -----------------------------------------------------------------------------

/// Everything needed to place one enemy, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: f32,
    /// Downward screen speed.
    pub speed: f32,
}

impl EnemySpawn {
    pub fn roll_regular(rng: &mut GameRng) -> Self {
        let x = rng.between(SPAWN_X.0, SPAWN_X.1) as f32;
        let size = rng.between(REGULAR_SIZE.0, REGULAR_SIZE.1) as f32;
        let speed = rng.between(REGULAR_SPEED.0, REGULAR_SPEED.1) as f32;
        Self {
            kind: EnemyKind::Regular,
            pos: Vec2::new(x, SPAWN_Y),
            size,
            speed,
        }
    }

    pub fn encounter(encounter: Encounter) -> Self {
        let (size, speed) = match encounter {
            Encounter::Miniboss1 | Encounter::Miniboss2 => (48.0, 30.0),
            Encounter::Boss => (64.0, 20.0),
        };
        Self {
            kind: encounter.into(),
            pos: ENCOUNTER_SPAWN,
            size,
            speed,
        }
    }
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_initial_wave);

    app.add_systems(
        Update,
        (
            spawn_regular_enemies,
            spawn_encounters.after(spawn_regular_enemies),
            wander,
        )
            .run_if(in_state(GameState::Playing)),
    );
}

#[inline]
fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerBullet])
}

/// Collision layers for an enemy that should no longer interact with anything.
///
/// We keep membership as "Enemy" but clear filters:
/// - avoids structural changes
/// - stops new collision interactions immediately
#[inline]
pub fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

pub fn spawn_enemy(
    commands: &mut Commands,
    tunables: &Tunables,
    spawn: EnemySpawn,
    wander: Option<Wander>,
) -> Entity {
    let pos = tunables.to_world(spawn.pos);
    let vel = tunables.velocity_to_world(Vec2::new(0.0, spawn.speed));
    // Elastic, frictionless bounce off the arena walls.
    let restitution = Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max);

    let mut e = commands.spawn((
        Name::new(format!("{:?}", spawn.kind)),
        Enemy::new(spawn.kind),
        Silhouette::square(spawn.kind.role(), spawn.size),
        Transform::from_translation(pos.extend(1.0)),
        Visibility::Visible,
        RigidBody::Dynamic,
        Collider::rectangle(spawn.size, spawn.size),
        LockedAxes::ROTATION_LOCKED,
        restitution,
        Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
        enemy_layers(),
        LinearVelocity(vel),
        DespawnOnExit(GameState::Playing),
    ));
    if let Some(w) = wander {
        e.insert(w);
    }
    e.id()
}

// -----------------------------------------------------------------------------
// Spawners
// -----------------------------------------------------------------------------

fn spawn_regular(commands: &mut Commands, tunables: &Tunables, rng: &mut GameRng) {
    let spawn = EnemySpawn::roll_regular(rng);
    let wander = Wander::roll(rng);
    debug!("spawning regular enemy at {:?} size {}", spawn.pos, spawn.size);
    spawn_enemy(commands, tunables, spawn, Some(wander));
}

fn spawn_initial_wave(mut commands: Commands, tunables: Res<Tunables>, mut rng: ResMut<GameRng>) {
    for _ in 0..tunables.initial_enemies {
        spawn_regular(&mut commands, &tunables, &mut rng);
    }
}

/// Top up regular enemies while fewer than `max_enemies` are alive.
fn spawn_regular_enemies(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    q_alive: Query<(), (With<Enemy>, Without<PendingDespawn>)>,
) {
    if q_alive.iter().count() >= tunables.max_enemies {
        return;
    }
    if rng.chance(REGULAR_SPAWN_ROLL.0, REGULAR_SPAWN_ROLL.1) {
        spawn_regular(&mut commands, &tunables, &mut rng);
    }
}

/// At most one encounter per frame, in priority order.
fn spawn_encounters(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
) {
    let Some(encounter) = session.bosses.due(session.score()) else {
        return;
    };

    session.bosses.open(encounter);
    info!("{encounter:?} incoming at score {}", session.score());
    spawn_enemy(&mut commands, &tunables, EnemySpawn::encounter(encounter), None);
}

fn wander(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut q: Query<(&mut Wander, &mut LinearVelocity), (With<Enemy>, Without<PendingDespawn>)>,
) {
    for (mut w, mut vel) in &mut q {
        w.timer.tick(time.delta());
        if !w.timer.just_finished() {
            continue;
        }
        vel.x = rng.between(WANDER_SPEED.0, WANDER_SPEED.1) as f32;
        *w = Wander::roll(&mut rng);
    }
}
