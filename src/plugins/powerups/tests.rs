use super::*;

use crate::common::test_utils::run_system_once;

fn power_up_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GameRng::seeded(seed));
    world
}

#[test]
fn spawned_power_up_heals_and_falls() {
    let mut world = power_up_world(0);
    let tunables = Tunables::default();
    let e = run_system_once(&mut world, move |mut commands: Commands| {
        spawn_power_up(&mut commands, &tunables, 100.0)
    });

    assert_eq!(world.get::<PowerUp>(e), Some(&PowerUp { heal: 20 }));
    let tf = world.get::<Transform>(e).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(-300.0, 250.0));
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(0.0, -50.0));
    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.filters.has_all(Layer::Player));
    assert!(!layers.filters.has_all(Layer::PlayerBullet));
}

#[test]
fn drops_are_rare_and_in_range() {
    let mut world = power_up_world(1234);
    for _ in 0..10_000 {
        run_system_once(&mut world, spawn_power_ups);
    }

    let tunables = Tunables::default();
    let xs: Vec<f32> = world
        .query_filtered::<&Transform, With<PowerUp>>()
        .iter(&world)
        .map(|tf| tunables.to_screen(tf.translation.truncate()).x)
        .collect();

    // 2 in 501 per frame: about 40 over 10k frames.
    assert!(!xs.is_empty());
    assert!(xs.len() < 150, "too many drops: {}", xs.len());
    assert!(xs.iter().all(|x| (50.0..=750.0).contains(x)));
}

#[test]
fn fallen_power_ups_are_marked() {
    let mut world = power_up_world(0);
    let fallen = world
        .spawn((PowerUp { heal: 20 }, Transform::from_xyz(0.0, -330.0, 1.0)))
        .id();
    let falling = world
        .spawn((PowerUp { heal: 20 }, Transform::from_xyz(0.0, -300.0, 1.0)))
        .id();

    run_system_once(&mut world, cull_fallen_power_ups);

    assert!(world.get::<PendingDespawn>(fallen).is_some());
    assert!(world.get::<PendingDespawn>(falling).is_none());
}
