//! Gameplay-side description of how an entity looks.
//!
//! Gameplay spawns carry a `Silhouette` and nothing render-specific. The render-only
//! shapes plugin turns it into sprites or meshes, so headless apps never touch
//! render assets.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Ship,
    Bullet,
    Grunt,
    Miniboss,
    Boss,
    PowerUp,
}

impl Role {
    pub fn color(self) -> Color {
        match self {
            Role::Ship => Color::srgb(0.0, 1.0, 0.0),
            Role::Bullet => Color::WHITE,
            Role::Grunt => Color::srgb(1.0, 0.0, 0.0),
            Role::Miniboss => Color::srgb(1.0, 0.647, 0.0),
            Role::Boss => Color::srgb(0.0, 0.0, 1.0),
            Role::PowerUp => Color::srgb(1.0, 1.0, 0.0),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Silhouette {
    pub role: Role,
    pub size: Vec2,
}

impl Silhouette {
    pub fn new(role: Role, size: Vec2) -> Self {
        Self { role, size }
    }

    pub fn square(role: Role, side: f32) -> Self {
        Self::new(role, Vec2::splat(side))
    }
}
