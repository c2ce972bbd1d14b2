//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `arcade_shooter::game::configure_headless` to install gameplay plugins.
//!
//! Time advances by a fixed manual step per `update()`, so every frame also runs
//! at least one fixed (physics) step.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use arcade_shooter::common::tunables::Tunables;

pub const FRAME: Duration = Duration::from_millis(20);

pub fn app_headless() -> App {
    app_headless_with(Tunables {
        rng_seed: Some(7),
        ..Tunables::default()
    })
}

pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    arcade_shooter::game::configure_headless(&mut app);
    // `App::run` would do this; plugins (avian) init resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

pub fn tick(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}
