//! Weapons plugin: fire gate and tier progression.
//!
//! The tier table and gate live in `common::arsenal`; these systems feed it the
//! clock, the trigger and the score.

use bevy::prelude::*;

use crate::common::session::Session;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, PlayerInput, gather_input};
use crate::plugins::projectiles::messages::SpawnBulletRequest;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (request_fire.after(gather_input), unlock_tiers.after(request_fire))
            .run_if(in_state(GameState::Playing)),
    );
}

/// Producer: trigger held + gate open -> one SpawnBulletRequest.
///
/// Never touches `BulletPool`. The gate is advanced by the allocator, and only
/// once a bullet was actually acquired.
pub fn request_fire(
    time: Res<Time>,
    input: Res<PlayerInput>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    if !input.fire {
        return;
    }

    let now = time.elapsed();
    if !session.arsenal.can_fire(now) {
        return;
    }

    let player_tf = match q_player.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single Player Transform: {e:?}");
            return;
        }
    };

    let tier = session.arsenal.tier();
    // Screen-space "y - offset" is world-space "y + offset".
    let pos = player_tf.translation.truncate() + Vec2::new(0.0, tunables.muzzle_offset);
    let vel = tunables.velocity_to_world(Vec2::new(0.0, tier.bullet_speed));

    writer.write(SpawnBulletRequest {
        pos,
        vel,
        fired_at: now,
        cooldown: tier.fire_rate,
    });
}

/// Advance at most one tier per frame once the score reaches the next threshold.
pub fn unlock_tiers(mut session: ResMut<Session>) {
    // Read through `Deref` first so idle frames do not flag the session as changed.
    if session.arsenal.is_maxed() || session.score() < session.arsenal.next_unlock() {
        return;
    }

    let score = session.score();
    if let Some(tier) = session.arsenal.try_unlock(score) {
        info!("weapon unlocked: {} at score {score}", tier.name);
    }
}
