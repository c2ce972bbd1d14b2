//! Spawn consumer: activate bullets from the pool.
//!
//! The allocator owns the fire-gate stamp: `Session.arsenal` is only held until
//! `fired_at + cooldown` once a slot was actually popped. A dropped request leaves
//! the gate open so the next frame fires again.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled bullet entities.
//! - Therefore, a pooled entity must match the bullet query.
//!
//! If this is violated, we `expect()` and crash loudly.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::session::Session;

use super::components::{BulletEntity, BulletState, PooledBullet};
use super::messages::SpawnBulletRequest;
use super::pool::{BulletPool, active_bullet_layers};

pub fn allocate_bullets_from_pool(
    mut pool: ResMut<BulletPool>,
    mut session: ResMut<Session>,
    mut reader: MessageReader<SpawnBulletRequest>,
    mut q: Query<(
        &mut BulletState,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
    ), With<PooledBullet>>,
) {
    for req in reader.read() {
        let Some(BulletEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("bullet pool exhausted, dropping fire request");
            continue;
        };

        let (mut state, mut tf, mut vel, mut vis, mut layers) =
            q.get_mut(e).expect("BulletPool contained an entity missing pooled bullet components");

        *state = BulletState::Active;
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_bullet_layers();

        session.arsenal.hold_fire_until(req.fired_at + req.cooldown);
    }
}
