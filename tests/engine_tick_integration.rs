//! Engine tick integration tests for movement, collision, bounce, animation
//! and input systems.

use bevy_ecs::prelude::*;

use pongscene::components::collider::Collider;
use pongscene::components::player::Player;
use pongscene::components::size::Size;
use pongscene::components::speed::Speed;
use pongscene::components::sprite::Sprite;
use pongscene::components::transform::Transform;
use pongscene::events::input::{InputAction, InputEvent};
use pongscene::resources::clock::Clock;
use pongscene::resources::gamestate::{GameStates, NextGameState};
use pongscene::resources::screensize::ScreenSize;
use pongscene::resources::worldtime::WorldTime;
use pongscene::systems::animation::sprite_animation;
use pongscene::systems::bounce::bounce;
use pongscene::systems::collision::collision_detection;
use pongscene::systems::input::player_input;
use pongscene::systems::movement::movement;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(NextGameState::new());
    world.insert_resource(Clock::manual());
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detection);
    schedule.run(world);
}

fn tick_bounce(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(bounce);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sprite_animation);
    schedule.run(world);
}

fn send_input(world: &mut World, event: InputEvent) {
    let id = world.register_system(player_input);
    world.run_system_with(id, event).unwrap();
}

fn spawn_mover(world: &mut World, x: f32, y: f32, speed: Speed, size: Size) -> Entity {
    world.spawn((Transform::new(x, y), speed, size)).id()
}

fn pending_state(world: &mut World) -> Option<GameStates> {
    world.resource_mut::<NextGameState>().take()
}

// ==================== MOVEMENT ====================

#[test]
fn movement_truncates_new_position() {
    let mut world = make_world(0.1);
    let e = spawn_mover(
        &mut world,
        100.0,
        100.0,
        Speed::new(55, -25),
        Size::new(10, 10),
    );

    tick_movement(&mut world);

    let t = world.get::<Transform>(e).unwrap();
    // 105.5 and 97.5 truncate toward zero
    assert!(approx_eq(t.x, 105.0));
    assert!(approx_eq(t.y, 97.0));
    assert_eq!(*world.get::<Speed>(e).unwrap(), Speed::new(55, -25));
    assert_eq!(pending_state(&mut world), None);
}

#[test]
fn movement_skips_zero_speed() {
    let mut world = make_world(0.1);
    // parked below the screen: a moving entity here would end the round
    let e = spawn_mover(&mut world, 100.5, 700.0, Speed::default(), Size::new(10, 10));

    tick_movement(&mut world);

    let t = world.get::<Transform>(e).unwrap();
    assert!(approx_eq(t.x, 100.5));
    assert!(approx_eq(t.y, 700.0));
    assert_eq!(pending_state(&mut world), None);
}

#[test]
fn left_wall_reflects_velocity_but_commits_candidate_position() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 3.0, 100.0, Speed::new(-50, 0), Size::new(10, 10));

    tick_movement(&mut world);

    assert_eq!(world.get::<Speed>(e).unwrap().x, 60);
    let t = world.get::<Transform>(e).unwrap();
    assert!(approx_eq(t.x, -2.0));

    // the reversed velocity brings it back on the next frame
    tick_movement(&mut world);
    let t = world.get::<Transform>(e).unwrap();
    assert!(approx_eq(t.x, 4.0));
}

#[test]
fn left_wall_reflects_at_exactly_zero() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 5.0, 100.0, Speed::new(-50, 0), Size::new(10, 10));

    tick_movement(&mut world);

    assert_eq!(world.get::<Speed>(e).unwrap().x, 60);
    assert!(approx_eq(world.get::<Transform>(e).unwrap().x, 0.0));
}

#[test]
fn right_wall_reflects_velocity() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 780.0, 100.0, Speed::new(100, 0), Size::new(20, 20));

    tick_movement(&mut world);

    assert_eq!(world.get::<Speed>(e).unwrap().x, -120);
    assert!(approx_eq(world.get::<Transform>(e).unwrap().x, 790.0));
}

#[test]
fn ceiling_reflects_vertical_velocity() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 100.0, 2.0, Speed::new(0, -50), Size::new(10, 10));

    tick_movement(&mut world);

    let speed = world.get::<Speed>(e).unwrap();
    assert_eq!(speed.x, 0);
    assert_eq!(speed.y, 60);
    assert!(approx_eq(world.get::<Transform>(e).unwrap().y, -3.0));
}

#[test]
fn reflection_truncates_scaled_velocity() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 1.0, 100.0, Speed::new(-17, 0), Size::new(10, 10));

    tick_movement(&mut world);

    // -17 * -1.2 = 20.4
    assert_eq!(world.get::<Speed>(e).unwrap().x, 20);
}

#[test]
fn crossing_bottom_ends_round_without_moving() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 100.0, 570.0, Speed::new(30, 200), Size::new(20, 20));

    tick_movement(&mut world);

    assert_eq!(pending_state(&mut world), Some(GameStates::RoundOver));
    let t = world.get::<Transform>(e).unwrap();
    assert!(approx_eq(t.x, 100.0));
    assert!(approx_eq(t.y, 570.0));
}

#[test]
fn touching_bottom_edge_is_not_round_over() {
    let mut world = make_world(0.1);
    let e = spawn_mover(&mut world, 100.0, 570.0, Speed::new(0, 100), Size::new(20, 20));

    tick_movement(&mut world);

    assert_eq!(pending_state(&mut world), None);
    assert!(approx_eq(world.get::<Transform>(e).unwrap().y, 580.0));
}

#[test]
fn movement_scales_with_delta() {
    let mut world = make_world(0.5);
    let e = spawn_mover(&mut world, 100.0, 100.0, Speed::new(100, 40), Size::new(10, 10));

    tick_movement(&mut world);

    let t = world.get::<Transform>(e).unwrap();
    assert!(approx_eq(t.x, 150.0));
    assert!(approx_eq(t.y, 120.0));
}

// ==================== COLLISION ====================

fn spawn_collider(world: &mut World, x: f32, y: f32, size: Size) -> Entity {
    world
        .spawn((Transform::new(x, y), size, Collider::new()))
        .id()
}

#[test]
fn overlap_triggers_collider_with_mover_speed() {
    let mut world = make_world(0.1);
    let ball = spawn_collider(&mut world, 100.0, 100.0, Size::new(20, 20));
    spawn_mover(&mut world, 110.0, 110.0, Speed::new(30, -5), Size::new(20, 20));

    tick_collision(&mut world);

    let collider = world.get::<Collider>(ball).unwrap();
    assert!(collider.triggered);
    assert_eq!(collider.transfer_speed, 30);
}

#[test]
fn touching_edges_do_not_collide() {
    let mut world = make_world(0.1);
    let ball = spawn_collider(&mut world, 100.0, 100.0, Size::new(20, 20));
    spawn_mover(&mut world, 120.0, 100.0, Speed::new(30, 0), Size::new(20, 20));
    spawn_mover(&mut world, 100.0, 120.0, Speed::new(30, 0), Size::new(20, 20));

    tick_collision(&mut world);

    assert!(!world.get::<Collider>(ball).unwrap().triggered);
}

#[test]
fn collider_never_hits_itself() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((
            Transform::new(100.0, 100.0),
            Size::new(20, 20),
            Speed::new(10, 10),
            Collider::new(),
        ))
        .id();

    tick_collision(&mut world);

    assert!(!world.get::<Collider>(ball).unwrap().triggered);
}

#[test]
fn non_overlapping_frame_keeps_previous_trigger() {
    let mut world = make_world(0.1);
    let ball = spawn_collider(&mut world, 100.0, 100.0, Size::new(20, 20));
    world.get_mut::<Collider>(ball).unwrap().trigger(7);

    tick_collision(&mut world);

    let collider = world.get::<Collider>(ball).unwrap();
    assert!(collider.triggered);
    assert_eq!(collider.transfer_speed, 7);
}

#[test]
fn last_overlapping_mover_wins_transfer_speed() {
    let mut world = make_world(0.1);
    let ball = spawn_collider(&mut world, 100.0, 100.0, Size::new(20, 20));
    spawn_mover(&mut world, 105.0, 105.0, Speed::new(11, 0), Size::new(5, 5));
    spawn_mover(&mut world, 110.0, 110.0, Speed::new(22, 0), Size::new(5, 5));

    tick_collision(&mut world);

    // both movers share an archetype, so they are visited in spawn order
    let collider = world.get::<Collider>(ball).unwrap();
    assert!(collider.triggered);
    assert_eq!(collider.transfer_speed, 22);
}

#[test]
fn last_mover_wins_even_when_slower() {
    let mut world = make_world(0.1);
    let ball = spawn_collider(&mut world, 100.0, 100.0, Size::new(20, 20));
    spawn_mover(&mut world, 105.0, 105.0, Speed::new(-90, 0), Size::new(5, 5));
    spawn_mover(&mut world, 110.0, 110.0, Speed::new(3, 0), Size::new(5, 5));
    spawn_mover(&mut world, 300.0, 300.0, Speed::new(77, 0), Size::new(5, 5));

    tick_collision(&mut world);

    // the third mover is visited last but does not overlap
    assert_eq!(world.get::<Collider>(ball).unwrap().transfer_speed, 3);
}

// ==================== BOUNCE ====================

#[test]
fn bounce_reverses_vertical_and_adds_transfer() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((Transform::new(0.0, 0.0), Speed::new(10, 100), Collider::new()))
        .id();
    world.get_mut::<Collider>(ball).unwrap().trigger(25);

    tick_bounce(&mut world);

    assert_eq!(*world.get::<Speed>(ball).unwrap(), Speed::new(35, -150));
    let collider = world.get::<Collider>(ball).unwrap();
    assert!(!collider.triggered);
    // only the flag is cleared; the next hit overwrites the speed
    assert_eq!(collider.transfer_speed, 25);
}

#[test]
fn bounce_truncates_scaled_velocity() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((Transform::new(0.0, 0.0), Speed::new(0, -7), Collider::new()))
        .id();
    world.get_mut::<Collider>(ball).unwrap().trigger(0);

    tick_bounce(&mut world);

    // -7 * -1.5 = 10.5
    assert_eq!(world.get::<Speed>(ball).unwrap().y, 10);
}

#[test]
fn untriggered_collider_keeps_speed() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((Transform::new(0.0, 0.0), Speed::new(10, 100), Collider::new()))
        .id();

    tick_bounce(&mut world);

    assert_eq!(*world.get::<Speed>(ball).unwrap(), Speed::new(10, 100));
}

#[test]
fn paddle_hit_sends_ball_back_up() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((
            Transform::new(400.0, 540.0),
            Size::new(15, 15),
            Speed::new(50, 100),
            Collider::new(),
        ))
        .id();
    spawn_mover(&mut world, 350.0, 560.0, Speed::new(-40, 0), Size::new(100, 20));

    tick_movement(&mut world);
    tick_collision(&mut world);
    tick_bounce(&mut world);

    // ball moved to (405, 550) and now overlaps the paddle; the paddle moved
    // to 346 and is still under it
    assert_eq!(*world.get::<Speed>(ball).unwrap(), Speed::new(10, -150));
}

// ==================== ANIMATION ====================

fn spawn_cat(world: &mut World) -> Entity {
    world
        .spawn(Sprite::animated("Sprites/Cat/SpriteSheet.png", 8, 5000, 0, 0))
        .id()
}

#[test]
fn animation_advances_one_column_after_84ms() {
    let mut world = make_world(0.1);
    let cat = spawn_cat(&mut world);
    world.resource_mut::<Clock>().set_ms(84);

    tick_animation(&mut world);

    let sprite = world.get::<Sprite>(cat).unwrap();
    assert_eq!(sprite.x_index, 1);
    assert_eq!(sprite.last_update, 84);
}

#[test]
fn animation_waits_for_a_whole_column() {
    let mut world = make_world(0.1);
    let cat = spawn_cat(&mut world);
    world.resource_mut::<Clock>().set_ms(80);

    tick_animation(&mut world);

    let sprite = world.get::<Sprite>(cat).unwrap();
    assert_eq!(sprite.x_index, 0);
    assert_eq!(sprite.last_update, 0);

    // partial time keeps accumulating from the last advance
    world.resource_mut::<Clock>().set_ms(90);
    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(cat).unwrap().x_index, 1);
}

#[test]
fn animation_wraps_around_the_sheet() {
    let mut world = make_world(0.1);
    let cat = spawn_cat(&mut world);
    world.resource_mut::<Clock>().set_ms(760);

    tick_animation(&mut world);

    // nine columns elapsed on an eight column sheet
    assert_eq!(world.get::<Sprite>(cat).unwrap().x_index, 1);
}

#[test]
fn static_sprite_never_animates() {
    let mut world = make_world(0.1);
    let cat = world.spawn(Sprite::new("Sprites/Cat/1.png")).id();
    world.resource_mut::<Clock>().set_ms(10_000);

    tick_animation(&mut world);

    let sprite = world.get::<Sprite>(cat).unwrap();
    assert_eq!(sprite.x_index, 0);
    assert_eq!(sprite.last_update, 0);
}

// ==================== INPUT ====================

#[test]
fn input_sets_and_clears_player_speed() {
    let mut world = make_world(0.1);
    let paddle = world.spawn((Speed::new(0, 5), Player::new(300))).id();

    send_input(&mut world, InputEvent::press(InputAction::Right));
    assert_eq!(*world.get::<Speed>(paddle).unwrap(), Speed::new(300, 5));

    send_input(&mut world, InputEvent::press(InputAction::Left));
    assert_eq!(*world.get::<Speed>(paddle).unwrap(), Speed::new(-300, 5));

    send_input(&mut world, InputEvent::release(InputAction::Right));
    assert_eq!(*world.get::<Speed>(paddle).unwrap(), Speed::new(0, 5));
}

#[test]
fn input_ignores_other_presses_and_non_players() {
    let mut world = make_world(0.1);
    let paddle = world.spawn((Speed::new(120, 0), Player::new(300))).id();
    let ball = world.spawn(Speed::new(40, 40)).id();

    send_input(&mut world, InputEvent::press(InputAction::Action));
    send_input(&mut world, InputEvent::press(InputAction::Back));
    assert_eq!(world.get::<Speed>(paddle).unwrap().x, 120);

    send_input(&mut world, InputEvent::release(InputAction::Back));
    assert_eq!(world.get::<Speed>(paddle).unwrap().x, 0);
    assert_eq!(*world.get::<Speed>(ball).unwrap(), Speed::new(40, 40));
}
