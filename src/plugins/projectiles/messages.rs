//! Buffered fire requests.
//!
//! Producers create *intent*; the allocator is the single writer of the pool.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnBulletRequest {
    /// World-space muzzle position.
    pub pos: Vec2,
    /// World-space velocity.
    pub vel: Vec2,
    /// Clock reading when the trigger was pulled.
    pub fired_at: Duration,
    /// Fire-rate of the tier that fired; applied only if a bullet was acquired.
    pub cooldown: Duration,
}
