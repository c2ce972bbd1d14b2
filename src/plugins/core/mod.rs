//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::despawn::despawn_marked;
use crate::common::rng::GameRng;
use crate::common::session::Session;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // Keep a caller-provided Tunables (tests seed the RNG through it).
    let tunables = app
        .world_mut()
        .get_resource_or_insert_with(Tunables::default)
        .clone();

    app.insert_resource(GameRng::from_seed_option(tunables.rng_seed));
    app.insert_resource(Session::default());
    app.insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)));

    app.add_systems(PostUpdate, despawn_marked);
}
