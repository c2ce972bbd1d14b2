//! Combat: turn physics contacts into gameplay messages, then apply their rules.
//!
//! FixedPostUpdate, after avian has written `CollisionStart`:
//!
//! ```text
//!   CollisionStart ──> classify_contacts ──┬─> BulletHitEnemy        ──> resolve_bullet_hits
//!                                          ├─> PlayerHitEnemy        ──> resolve_player_hits
//!                                          └─> PlayerCollectedPowerUp ──> resolve_power_ups
//! ```
//!
//! Each entity is claimed at most once per pass. Claimed enemies and power-ups are
//! marked `PendingDespawn` and lose their collision filters right away; the actual
//! despawn happens in `PostUpdate`.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::despawn::PendingDespawn;
use crate::common::layers::Layer;
use crate::common::session::Session;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{Enemy, non_interacting_enemy_layers};
use crate::plugins::player::Player;
use crate::plugins::powerups::PowerUp;
use crate::plugins::projectiles::components::{BulletState, PooledBullet};

// -----------------------------------------------------------------------------
// Messages
// -----------------------------------------------------------------------------

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHitEnemy {
    pub bullet: Entity,
    pub enemy: Entity,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHitEnemy {
    pub enemy: Entity,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCollectedPowerUp {
    pub power_up: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_message::<BulletHitEnemy>()
        .add_message::<PlayerHitEnemy>()
        .add_message::<PlayerCollectedPowerUp>();

    app.add_systems(
        FixedPostUpdate,
        (
            classify_contacts.after(CollisionEventSystems),
            // Contact damage first: a lethal blow ends the pass for the others.
            (resolve_player_hits, resolve_bullet_hits, resolve_power_ups)
                .chain()
                .after(classify_contacts),
        )
            .run_if(in_state(GameState::Playing).and(session_live)),
    );
}

// -----------------------------------------------------------------------------
// Classification
// -----------------------------------------------------------------------------

/// Gameplay owner of one side of a contact: the rigid body if there is one.
#[inline]
fn owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    BulletEnemy { bullet: Entity, enemy: Entity },
    PlayerEnemy { enemy: Entity },
    PlayerPowerUp { power_up: Entity },
}

pub fn classify_contacts(
    mut started: MessageReader<CollisionStart>,
    q_bullets: Query<&BulletState, With<PooledBullet>>,
    q_enemies: Query<(), (With<Enemy>, Without<PendingDespawn>)>,
    q_player: Query<(), With<Player>>,
    q_power_ups: Query<(), (With<PowerUp>, Without<PendingDespawn>)>,
    mut bullet_hits: MessageWriter<BulletHitEnemy>,
    mut player_hits: MessageWriter<PlayerHitEnemy>,
    mut pickups: MessageWriter<PlayerCollectedPowerUp>,
    // Per-pass dedupe
    mut claimed: Local<HashSet<Entity>>,
) {
    claimed.clear();

    let classify = |a: Entity, b: Entity| -> Option<Contact> {
        let active_bullet = |e: Entity| q_bullets.get(e).is_ok_and(|s| *s == BulletState::Active);

        if active_bullet(a) && q_enemies.contains(b) {
            return Some(Contact::BulletEnemy { bullet: a, enemy: b });
        }
        if q_player.contains(a) && q_enemies.contains(b) {
            return Some(Contact::PlayerEnemy { enemy: b });
        }
        if q_player.contains(a) && q_power_ups.contains(b) {
            return Some(Contact::PlayerPowerUp { power_up: b });
        }
        None
    };

    for ev in started.read() {
        let a = owner(ev.collider1, ev.body1);
        let b = owner(ev.collider2, ev.body2);

        let Some(contact) = classify(a, b).or_else(|| classify(b, a)) else {
            continue;
        };

        match contact {
            Contact::BulletEnemy { bullet, enemy } => {
                if claimed.contains(&bullet) || claimed.contains(&enemy) {
                    continue;
                }
                claimed.insert(bullet);
                claimed.insert(enemy);
                bullet_hits.write(BulletHitEnemy { bullet, enemy });
            }
            Contact::PlayerEnemy { enemy } => {
                if !claimed.insert(enemy) {
                    continue;
                }
                player_hits.write(PlayerHitEnemy { enemy });
            }
            Contact::PlayerPowerUp { power_up } => {
                if !claimed.insert(power_up) {
                    continue;
                }
                pickups.write(PlayerCollectedPowerUp { power_up });
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Rule reactions
// -----------------------------------------------------------------------------

/// Remaining fixed steps of the frame that ended the session resolve nothing.
fn session_live(session: Res<Session>) -> bool {
    !session.is_over()
}

fn retire_enemy(commands: &mut Commands, layers: &mut CollisionLayers, enemy: Entity) {
    *layers = non_interacting_enemy_layers();
    commands.entity(enemy).insert(PendingDespawn);
}

pub fn resolve_bullet_hits(
    mut commands: Commands,
    mut hits: MessageReader<BulletHitEnemy>,
    mut session: ResMut<Session>,
    mut q_bullets: Query<&mut BulletState, With<PooledBullet>>,
    mut q_enemies: Query<(&Enemy, &mut CollisionLayers), Without<PendingDespawn>>,
) {
    for hit in hits.read() {
        if session.is_over() {
            continue;
        }
        let Ok((enemy, mut layers)) = q_enemies.get_mut(hit.enemy) else {
            continue;
        };
        let Ok(mut state) = q_bullets.get_mut(hit.bullet) else {
            continue;
        };

        *state = BulletState::PendingReturn;
        session.award(enemy.points);
        retire_enemy(&mut commands, &mut layers, hit.enemy);
    }
}

pub fn resolve_player_hits(
    mut commands: Commands,
    mut hits: MessageReader<PlayerHitEnemy>,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut q_enemies: Query<&mut CollisionLayers, (With<Enemy>, Without<PendingDespawn>)>,
) {
    for hit in hits.read() {
        if session.is_over() {
            continue;
        }
        let Ok(mut layers) = q_enemies.get_mut(hit.enemy) else {
            continue;
        };

        retire_enemy(&mut commands, &mut layers, hit.enemy);
        if session.damage(tunables.contact_damage) {
            info!("ship destroyed with score {}", session.score());
        }
    }
}

pub fn resolve_power_ups(
    mut commands: Commands,
    mut pickups: MessageReader<PlayerCollectedPowerUp>,
    mut session: ResMut<Session>,
    mut q_power_ups: Query<(&PowerUp, &mut CollisionLayers), Without<PendingDespawn>>,
) {
    for pickup in pickups.read() {
        if session.is_over() {
            continue;
        }
        let Ok((power_up, mut layers)) = q_power_ups.get_mut(pickup.power_up) else {
            continue;
        };

        *layers = CollisionLayers::new(Layer::PowerUp, [] as [Layer; 0]);
        commands.entity(pickup.power_up).insert(PendingDespawn);
        session.heal(power_up.heal);
    }
}
