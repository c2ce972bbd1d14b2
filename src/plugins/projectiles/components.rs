use bevy::prelude::*;

/// Marker: entity is one of the pre-spawned pool slots.
#[derive(Component, Debug, Clone, Copy)]
pub struct PooledBullet;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Newtype for entities that are known pool slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BulletEntity(pub Entity);
