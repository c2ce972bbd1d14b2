use std::time::Duration;

use bevy::prelude::*;

use crate::common::session::Session;
use crate::common::state::GameState;
use crate::common::test_utils::run_system_once;

use super::*;

fn flow_world() -> World {
    let mut world = World::new();
    world.insert_resource(Session::default());
    world.insert_resource(NextState::<GameState>::default());
    world.insert_resource(Time::<Virtual>::default());
    world
}

fn queued(world: &World) -> Option<GameState> {
    match world.resource::<NextState<GameState>>() {
        NextState::Pending(s) => Some(*s),
        _ => None,
    }
}

#[test]
fn defeat_waits_for_zero_health() {
    let mut world = flow_world();
    world.resource_mut::<Session>().damage(90);
    run_system_once(&mut world, check_for_defeat);
    assert_eq!(queued(&world), None);

    world.resource_mut::<Session>().damage(10);
    run_system_once(&mut world, check_for_defeat);
    assert_eq!(queued(&world), Some(GameState::GameOver));
}

#[test]
fn game_over_pauses_and_new_session_resumes() {
    let mut world = flow_world();
    {
        let mut s = world.resource_mut::<Session>();
        s.award(320);
        s.damage(100);
        s.arsenal.try_unlock(320);
        s.arsenal.hold_fire_until(Duration::from_secs(9));
    }

    run_system_once(&mut world, freeze_world);
    assert!(world.resource::<Time<Virtual>>().is_paused());

    run_system_once(&mut world, begin_session);
    assert!(!world.resource::<Time<Virtual>>().is_paused());
    assert_eq!(*world.resource::<Session>(), Session::default());
}

#[test]
fn enter_key_restarts() {
    let mut world = flow_world();
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Enter);
    world.insert_resource(keys);

    run_system_once(&mut world, restart_on_input);
    assert_eq!(queued(&world), Some(GameState::Playing));
}

#[test]
fn left_click_restarts() {
    let mut world = flow_world();
    let mut mouse = ButtonInput::<MouseButton>::default();
    mouse.press(MouseButton::Left);
    world.insert_resource(mouse);

    run_system_once(&mut world, restart_on_input);
    assert_eq!(queued(&world), Some(GameState::Playing));
}

#[test]
fn other_input_or_no_devices_does_nothing() {
    let mut world = flow_world();
    run_system_once(&mut world, restart_on_input);
    assert_eq!(queued(&world), None);

    let mut mouse = ButtonInput::<MouseButton>::default();
    mouse.press(MouseButton::Right);
    world.insert_resource(mouse);
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Space);
    world.insert_resource(keys);

    run_system_once(&mut world, restart_on_input);
    assert_eq!(queued(&world), None);
}

#[test]
fn defeat_is_queued_even_if_a_heal_follows_the_lethal_blow() {
    let mut world = flow_world();
    {
        let mut s = world.resource_mut::<Session>();
        s.damage(90);
        assert!(s.damage(10));
        s.heal(20);
    }

    run_system_once(&mut world, check_for_defeat);
    assert_eq!(world.resource::<Session>().health(), 0);
    assert_eq!(queued(&world), Some(GameState::GameOver));
}
