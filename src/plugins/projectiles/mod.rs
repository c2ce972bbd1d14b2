//! Projectiles plugin: **message-based producer → consumer** firing over a fixed pool.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: weapons::request_fire                                       │
//!│      - reads: PlayerInput, Session.arsenal, Player Transform, Time         │
//!│      - writes: SpawnBulletRequest message                                  │
//!│                                                                            │
//!│  (B) Consumer: allocate_bullets_from_pool                                  │
//!│      - reads: SpawnBulletRequest messages                                  │
//!│      - mutates: BulletPool.free, BulletState, Transform, Velocity,         │
//!│                 Visibility, CollisionLayers, Session.arsenal fire stamp    │
//!│                                                                            │
//!│  (C) recycle_stray_bullets: Active + outside arena -> PendingReturn        │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (D) combat: CollisionStart -> BulletHitEnemy -> BulletState PendingReturn │
//!│                                                                            │
//!│  (E) Commit returns: return_to_pool_commit                                 │
//!│      - writes invariants for Inactive state                                │
//!│      - mutates: BulletPool.free.push(BulletEntity)                         │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Where do we still branch?
//! - Capacity: pool can be empty → allocator drops the request and the fire gate
//!   stays open, so the next frame tries again.
//! Everything else is treated as an invariant violation.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod messages;
pub mod pool;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().bullet_pool_size;

        // Pool + pre-spawn
        app.insert_resource(pool::BulletPool::new(capacity))
            .add_systems(Startup, pool::init_bullet_pool)
            .add_systems(OnEnter(GameState::Playing), pool::reset_bullet_pool);

        app.add_message::<messages::SpawnBulletRequest>();

        app.add_systems(
            Update,
            (
                allocator::allocate_bullets_from_pool
                    .after(crate::plugins::weapons::request_fire),
                commit::recycle_stray_bullets,
            )
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            FixedPostUpdate,
            commit::return_to_pool_commit
                .after(crate::plugins::combat::resolve_bullet_hits)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
