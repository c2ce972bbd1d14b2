//! Return commit: recycle bullets back into the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive bullets must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{BulletEntity, BulletState, PooledBullet};
use super::pool::{BULLET_SIZE, BulletPool, inactive_bullet_layers};

pub fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<(
        Entity,
        &mut BulletState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledBullet>>,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != BulletState::PendingReturn {
            continue;
        }

        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_bullet_layers();

        pool.push_free(BulletEntity(e));
    }
}

/// Active bullets that flew out of the arena go back to the pool.
pub fn recycle_stray_bullets(
    tunables: Res<Tunables>,
    mut q: Query<(&Transform, &mut BulletState), With<PooledBullet>>,
) {
    for (tf, mut state) in &mut q {
        if *state == BulletState::Active && !tunables.in_arena(tf.translation.truncate(), BULLET_SIZE.y) {
            *state = BulletState::PendingReturn;
        }
    }
}
