//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod flow;
pub mod physics;
pub mod player;
pub mod powerups;
pub mod projectiles;
pub mod ui;
pub mod weapons;
pub mod world;

// Render-only
pub mod camera;
pub mod shapes;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    weapons::plugin(app);
    enemies::plugin(app);
    powerups::plugin(app);
    combat::plugin(app);
    flow::plugin(app);
    ui::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    shapes::plugin(app);
}
