//! Fixed-capacity bullet pool.
//!
//! Every slot is spawned once and then only toggled between states. Inactive slots
//! stay in the world but are hidden, still, and collide with nothing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::silhouette::{Role, Silhouette};

use super::components::{BulletEntity, BulletState, PooledBullet};

pub const BULLET_SIZE: Vec2 = Vec2::new(8.0, 20.0);

#[derive(Resource, Debug)]
pub struct BulletPool {
    free: Vec<BulletEntity>,
    capacity: usize,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<BulletEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: BulletEntity) {
        debug_assert!(self.free.len() < self.capacity, "BulletPool over-filled");
        self.free.push(e);
    }

    fn clear(&mut self) {
        self.free.clear();
    }
}

#[inline]
pub fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::Enemy])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

/// Pre-spawn pooled bullets (inactive).
pub fn init_bullet_pool(mut commands: Commands, mut pool: ResMut<BulletPool>) {
    pool.clear();
    let cap = pool.capacity;

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Bullet(Pooled)"),
                PooledBullet,
                BulletState::Inactive,
                Silhouette::new(Role::Bullet, BULLET_SIZE),
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                // Dynamic sensor: reports overlaps, never pushes anything.
                RigidBody::Dynamic,
                Sensor,
                Collider::rectangle(BULLET_SIZE.x, BULLET_SIZE.y),
                Mass(1.0),
                LockedAxes::ROTATION_LOCKED,
                inactive_bullet_layers(),
                LinearVelocity(Vec2::ZERO),
                // Keep this always; inactive bullets won't collide anyway because layers are empty.
                CollisionEventsEnabled,
            ))
            .id();

        pool.push_free(BulletEntity(e));
    }
}

/// Return every slot to the pool, whatever state it was left in.
///
/// Runs when a session begins so bullets frozen on the game-over screen disappear.
pub fn reset_bullet_pool(
    mut pool: ResMut<BulletPool>,
    mut q: Query<(
        Entity,
        &mut BulletState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledBullet>>,
) {
    pool.clear();
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_bullet_layers();
        pool.push_free(BulletEntity(e));
    }
}
