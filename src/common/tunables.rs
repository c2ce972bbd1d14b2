//! Tunable gameplay constants.
//!
//! Gameplay rules speak **screen space**: origin top-left, x right, y down, with the
//! arena spanning `arena_size`. Bevy renders in world space (origin centre, y up).
//! The conversions below are the only place the two meet.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub arena_size: Vec2,
    pub player_speed: f32,
    pub player_size: f32,
    /// Screen-space spawn point of the ship.
    pub player_spawn: Vec2,
    pub bullet_pool_size: usize,
    /// Bullets leave the ship this far above its centre.
    pub muzzle_offset: f32,
    pub initial_enemies: usize,
    /// Regular spawns stop while this many enemies (of any kind) are alive.
    pub max_enemies: usize,
    pub contact_damage: i32,
    pub power_up_heal: i32,
    pub power_up_speed: f32,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            arena_size: Vec2::new(800.0, 600.0),
            player_speed: 300.0,
            player_size: 32.0,
            player_spawn: Vec2::new(400.0, 500.0),
            bullet_pool_size: 20,
            muzzle_offset: 20.0,
            initial_enemies: 5,
            max_enemies: 5,
            contact_damage: 10,
            power_up_heal: 20,
            power_up_speed: 50.0,
            rng_seed: None,
        }
    }
}

impl Tunables {
    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.arena_size.x * 0.5,
            self.arena_size.y * 0.5 - screen.y,
        )
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            world.x + self.arena_size.x * 0.5,
            self.arena_size.y * 0.5 - world.y,
        )
    }

    /// Screen velocities only differ from world velocities by the y flip.
    #[inline]
    pub fn velocity_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, -screen.y)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.arena_size * 0.5
    }

    /// Is a world-space point inside the arena grown by `margin` on every side?
    pub fn in_arena(&self, world: Vec2, margin: f32) -> bool {
        let half = self.half_extents() + Vec2::splat(margin);
        world.x.abs() <= half.x && world.y.abs() <= half.y
    }
}
