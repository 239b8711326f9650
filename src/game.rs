//! Demo scenes.
//!
//! Builders that assemble a [`Scene`] from a [`GameConfig`]: entities,
//! resources and the systems of every phase, in the order they must run.

use bevy_ecs::name::Name;
use log::info;

use crate::components::collider::Collider;
use crate::components::player::Player;
use crate::components::size::Size;
use crate::components::speed::Speed;
use crate::components::sprite::{SimpleSprite, Sprite};
use crate::components::transform::Transform;
use crate::resources::gameconfig::{GameConfig, MapMode};
use crate::resources::offset::{NoiseOffset, RandomOffset};
use crate::resources::tilemap::TileLayout;
use crate::scene::Scene;
use crate::systems::animation::sprite_animation;
use crate::systems::bounce::bounce;
use crate::systems::collision::collision_detection;
use crate::systems::input::player_input;
use crate::systems::movement::movement;
use crate::systems::render::{rect_render, simple_sprite_render, sprite_render, tilemap_render};
use crate::systems::sprite::{sprite_assets_setup, sprite_assets_teardown};
use crate::systems::tilemap::{literal_tilemap_setup, noise_tilemap_setup, tilemap_teardown};

const CAT_SPRITE: &str = "Sprites/Cat/1.png";
const CAT_SHEET: &str = "Sprites/Cat/SpriteSheet.png";

const PADDLE_WIDTH: i32 = 100;
const PADDLE_HEIGHT: i32 = 20;
const PADDLE_SPEED: i32 = 400;
const BALL_SIZE: i32 = 15;
const BALL_SPEED: Speed = Speed { x: 150, y: -200 };

fn new_scene(name: &str, config: &GameConfig) -> Scene {
    let mut scene = Scene::new(
        name,
        config.screen_width as i32,
        config.screen_height as i32,
    );
    scene.insert_resource(config.clone());
    scene
}

/// Register the world tile map, noise or literal depending on the config.
fn add_tilemap(scene: &mut Scene, config: &GameConfig, layout: Option<TileLayout>) {
    match config.map_mode {
        MapMode::Noise => {
            let offset = match config.seed {
                Some(seed) => NoiseOffset::new(RandomOffset::with_seed(seed)),
                None => NoiseOffset::default(),
            };
            scene
                .insert_resource(config.map)
                .insert_resource(offset)
                .add_setup_system_with_teardown(noise_tilemap_setup, tilemap_teardown);
        }
        MapMode::Literal => {
            if let Some(layout) = layout {
                scene.insert_resource(layout);
            }
            scene.add_setup_system_with_teardown(literal_tilemap_setup, tilemap_teardown);
        }
    }
    scene.add_render_system(tilemap_render);
}

/// Three cats over a generated tile map: two static sprites, one with a
/// shader variant, and an 8-frame animated sprite sheet.
pub fn gameplay_scene(config: &GameConfig, layout: Option<TileLayout>) -> Scene {
    let mut scene = new_scene("GAMEPLAY SCENE", config);

    let white = scene.create_entity("cat1", 100.0, 100.0);
    scene.add_component(white, SimpleSprite::new(CAT_SPRITE));

    let black = scene.create_entity("cat2", 300.0, 100.0);
    scene.add_component(black, SimpleSprite::new(CAT_SPRITE).with_shader("sampleShader"));

    let anim = scene.create_entity("cat3", 500.0, 100.0);
    scene.add_component(anim, Sprite::animated(CAT_SHEET, 8, 5000, 0, 0));

    add_tilemap(&mut scene, config, layout);

    scene
        .add_setup_system_with_teardown(sprite_assets_setup, sprite_assets_teardown)
        .add_render_system(simple_sprite_render)
        .add_render_system(sprite_render)
        .add_update_system(sprite_animation);

    info!("Built {} with {:?} tile map", scene.name(), config.map_mode);
    scene
}

fn paddle_start(config: &GameConfig) -> (f32, f32) {
    let x = (config.screen_width as i32 - PADDLE_WIDTH) / 2;
    let y = config.screen_height as i32 - PADDLE_HEIGHT * 2;
    (x as f32, y as f32)
}

fn ball_start(config: &GameConfig) -> (f32, f32) {
    let x = (config.screen_width as i32 - BALL_SIZE) / 2;
    let y = (config.screen_height as i32 - BALL_SIZE) / 2;
    (x as f32, y as f32)
}

/// Player paddle and a bouncing ball, drawn as rectangles over the tile map.
///
/// The ball carries the collider: when it touches the paddle it bounces and
/// picks up the paddle's horizontal speed. It ends the round when it leaves
/// through the bottom edge.
pub fn pong_scene(config: &GameConfig, layout: Option<TileLayout>) -> Scene {
    let mut scene = new_scene("PONG SCENE", config);

    let (px, py) = paddle_start(config);
    let paddle = scene.create_entity("paddle", px, py);
    scene
        .add_component(paddle, Size::new(PADDLE_WIDTH, PADDLE_HEIGHT))
        .add_component(paddle, Speed::default())
        .add_component(paddle, Player::new(PADDLE_SPEED));

    let (bx, by) = ball_start(config);
    let ball = scene.create_entity("ball", bx, by);
    scene
        .add_component(ball, Size::new(BALL_SIZE, BALL_SIZE))
        .add_component(ball, BALL_SPEED)
        .add_component(ball, Collider::new());

    add_tilemap(&mut scene, config, layout);

    scene
        .add_event_system(player_input)
        .add_update_system(movement)
        .add_update_system(collision_detection)
        .add_update_system(bounce)
        .add_render_system(rect_render);

    info!("Built {} with {:?} tile map", scene.name(), config.map_mode);
    scene
}

/// Put the ball back in the middle of the field with its serve speed.
///
/// Used between rounds of [`pong_scene`]; a scene without a ball is left
/// untouched.
pub fn serve_ball(scene: &mut Scene, config: &GameConfig) {
    let (bx, by) = ball_start(config);
    let mut view = scene.view::<(&Name, &mut Transform, &mut Speed, &mut Collider)>();
    for (name, mut transform, mut speed, mut collider) in view.iter_mut(scene.world_mut()) {
        if name.as_str() != "ball" {
            continue;
        }
        *transform = Transform::new(bx, by);
        *speed = BALL_SPEED;
        collider.clear();
    }
}
