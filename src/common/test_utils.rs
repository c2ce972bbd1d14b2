//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally
//! handled by schedule boundaries. We call `world.flush()` after running so queued
//! commands are applied before assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A generic clock that reports `elapsed` as "now" and `delta` as the last step.
pub fn clock_at(elapsed: Duration, delta: Duration) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(elapsed.saturating_sub(delta));
    t.advance_by(delta);
    t
}
