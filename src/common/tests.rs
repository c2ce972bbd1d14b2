use std::time::Duration;

use bevy::prelude::*;
use proptest::prelude::*;

use super::arsenal::{Arsenal, TIERS, UNREACHABLE_UNLOCK};
use super::rng::GameRng;
use super::session::{BossGates, Encounter, MAX_HEALTH, Session};
use super::tunables::Tunables;

// -----------------------------------------------------------------------------
// Session
// -----------------------------------------------------------------------------

#[test]
fn fresh_session_starts_clean() {
    let s = Session::default();
    assert_eq!(s.score(), 0);
    assert_eq!(s.health(), MAX_HEALTH);
    assert!(!s.is_over());
    assert_eq!(s.bosses, BossGates::default());
    assert_eq!(s.arsenal.index(), 0);
}

#[test]
fn heal_caps_at_max_health() {
    let mut s = Session::default();
    s.damage(10);
    s.heal(20);
    assert_eq!(s.health(), MAX_HEALTH);
}

#[test]
fn lethal_damage_clamps_to_zero_and_ends_session() {
    let mut s = Session::default();
    for _ in 0..9 {
        assert!(!s.damage(10));
    }
    assert_eq!(s.health(), 10);
    assert!(s.damage(10));
    assert_eq!(s.health(), 0);
    assert!(s.is_over());

    // Further hits are ignored once over.
    assert!(!s.damage(10));
    assert_eq!(s.health(), 0);
}

#[test]
fn heal_does_nothing_once_over() {
    let mut s = Session::default();
    s.damage(MAX_HEALTH);
    s.heal(20);
    assert_eq!(s.health(), 0);
    assert!(s.is_over());
}

#[test]
fn reset_restores_defaults() {
    let mut s = Session::default();
    s.award(700);
    s.damage(40);
    s.bosses.open(Encounter::Miniboss1);
    s.arsenal.try_unlock(700);
    s.arsenal.hold_fire_until(Duration::from_secs(3));

    s.reset();
    assert_eq!(s, Session::default());
    assert_eq!(s.arsenal.next_fire_at(), Duration::ZERO);
}

// -----------------------------------------------------------------------------
// Boss gates
// -----------------------------------------------------------------------------

#[test]
fn boss_gates_follow_priority_one_at_a_time() {
    let mut gates = BossGates::default();
    assert_eq!(gates.due(249), None);
    assert_eq!(gates.due(250), Some(Encounter::Miniboss1));

    // A score past every threshold still yields them one by one, lowest first.
    let mut order = Vec::new();
    while let Some(e) = gates.due(5_000) {
        gates.open(e);
        order.push(e);
    }
    assert_eq!(order, Encounter::ALL.to_vec());
    assert_eq!(gates.due(5_000), None);
}

#[test]
fn boss_gate_waits_for_its_own_threshold() {
    let mut gates = BossGates::default();
    gates.open(Encounter::Miniboss1);
    assert_eq!(gates.due(499), None);
    assert_eq!(gates.due(500), Some(Encounter::Miniboss2));
}

// -----------------------------------------------------------------------------
// Arsenal
// -----------------------------------------------------------------------------

#[test]
fn tiers_have_strictly_increasing_costs() {
    for pair in TIERS.windows(2) {
        assert!(pair[0].unlock_cost < pair[1].unlock_cost);
    }
}

#[test]
fn arsenal_starts_on_basic_gun() {
    let a = Arsenal::default();
    assert_eq!(a.tier().name, "Basic Gun");
    assert_eq!(a.tier().fire_rate, Duration::from_millis(300));
    assert_eq!(a.tier().bullet_speed, -400.0);
    assert_eq!(a.next_unlock(), 50);
}

#[test]
fn arsenal_unlocks_one_tier_per_call() {
    let mut a = Arsenal::default();
    assert!(a.try_unlock(49).is_none());

    // 400 is enough for every tier, yet only one step is taken per call.
    assert_eq!(a.try_unlock(400).map(|t| t.name), Some("Double Shot"));
    assert_eq!(a.next_unlock(), 150);
    assert_eq!(a.try_unlock(400).map(|t| t.name), Some("Rapid Fire"));
    assert_eq!(a.try_unlock(400).map(|t| t.name), Some("Laser Beam"));
    assert!(a.is_maxed());
    assert_eq!(a.next_unlock(), UNREACHABLE_UNLOCK);
    assert!(a.try_unlock(u32::MAX).is_none());
    assert_eq!(a.index(), TIERS.len() - 1);
}

#[test]
fn fire_gate_is_strict() {
    let mut a = Arsenal::default();
    assert!(!a.can_fire(Duration::ZERO));
    assert!(a.can_fire(Duration::from_millis(1)));

    a.hold_fire_until(Duration::from_millis(300));
    assert!(!a.can_fire(Duration::from_millis(300)));
    assert!(a.can_fire(Duration::from_millis(301)));
}

// -----------------------------------------------------------------------------
// Tunables / RNG
// -----------------------------------------------------------------------------

#[test]
fn screen_world_mapping_round_trips_corners() {
    let t = Tunables::default();
    assert_eq!(t.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
    assert_eq!(t.to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
    assert_eq!(t.to_screen(Vec2::ZERO), Vec2::new(400.0, 300.0));
    assert_eq!(t.velocity_to_world(Vec2::new(0.0, -400.0)), Vec2::new(0.0, 400.0));
}

#[test]
fn in_arena_respects_margin() {
    let t = Tunables::default();
    assert!(t.in_arena(Vec2::new(400.0, 300.0), 0.0));
    assert!(!t.in_arena(Vec2::new(0.0, 310.0), 0.0));
    assert!(t.in_arena(Vec2::new(0.0, 310.0), 20.0));
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = GameRng::seeded(7);
    let mut b = GameRng::seeded(7);
    for _ in 0..100 {
        assert_eq!(a.between(-100, 100), b.between(-100, 100));
    }
}

#[test]
fn between_is_inclusive() {
    let mut rng = GameRng::seeded(1);
    let mut seen_lo = false;
    let mut seen_hi = false;
    for _ in 0..2_000 {
        let v = rng.between(20, 30);
        assert!((20..=30).contains(&v));
        seen_lo |= v == 20;
        seen_hi |= v == 30;
    }
    assert!(seen_lo && seen_hi);
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Award(u32),
    Damage(i32),
    Heal(i32),
    Unlock,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(vec![5u32, 100, 500]).prop_map(Op::Award),
        (0i32..=30).prop_map(Op::Damage),
        (0i32..=30).prop_map(Op::Heal),
        Just(Op::Unlock),
    ]
}

proptest! {
    #[test]
    fn session_invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..200)) {
        let mut s = Session::default();
        let mut prev_score = 0;
        let mut prev_tier = 0;

        for op in ops {
            match op {
                Op::Award(p) => {
                    s.award(p);
                    prop_assert_eq!(s.score(), prev_score + p);
                }
                Op::Damage(d) => { s.damage(d); }
                Op::Heal(h) => { s.heal(h); }
                Op::Unlock => {
                    let score = s.score();
                    s.arsenal.try_unlock(score);
                }
            }

            prop_assert!((0..=MAX_HEALTH).contains(&s.health()));
            prop_assert!(s.score() >= prev_score);
            prop_assert!(s.arsenal.index() >= prev_tier);
            prop_assert!(s.arsenal.index() - prev_tier <= 1);
            prev_score = s.score();
            prev_tier = s.arsenal.index();
        }
    }

    #[test]
    fn gates_only_open_past_threshold(scores in prop::collection::vec(0u32..1500, 1..50)) {
        let mut gates = BossGates::default();
        for score in scores {
            if let Some(e) = gates.due(score) {
                prop_assert!(score >= e.threshold());
                prop_assert!(!gates.is_open(e));
                gates.open(e);
            }
        }
    }
}
