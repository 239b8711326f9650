//! Pongscene headless runner.
//!
//! Builds one of the demo scenes, runs it for a fixed number of frames at a
//! fixed step with a scripted input sequence, and logs what happens. Draw
//! requests are recorded instead of rendered.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene pong --frames 1200 --seed 7
//! RUST_LOG=debug cargo run -- --literal --layout assets/layout.json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{error, info, warn};

use pongscene::events::input::{InputAction, InputEvent};
use pongscene::game::{gameplay_scene, pong_scene, serve_ball};
use pongscene::resources::gameconfig::{GameConfig, MapMode};
use pongscene::resources::tilemap::TileLayout;
use pongscene::scene::FrameOutcome;
use pongscene::surface::RecordingSurface;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneKind {
    Gameplay,
    Pong,
}

/// Pongscene headless simulation runner
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Frames to simulate (overrides [simulation] frames).
    #[arg(long)]
    frames: Option<u32>,

    /// Seed for the noise map offset (overrides [map] seed).
    #[arg(long)]
    seed: Option<u64>,

    /// Demo scene to run.
    #[arg(long, value_enum, default_value_t = SceneKind::Gameplay)]
    scene: SceneKind,

    /// Use a literal tile layout instead of noise.
    #[arg(long)]
    literal: bool,

    /// JSON tile layout for literal maps. Implies --literal.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,
}

/// Paddle input for frame `frame`: sweep right, then left, every four seconds.
fn scripted_input(frame: u32, fps: u32) -> Vec<InputEvent> {
    let fps = fps.max(1);
    match frame % (fps * 4) {
        f if f == fps / 2 => vec![InputEvent::press(InputAction::Right)],
        f if f == fps * 3 / 2 => vec![InputEvent::release(InputAction::Right)],
        f if f == fps * 5 / 2 => vec![InputEvent::press(InputAction::Left)],
        f if f == fps * 7 / 2 => vec![InputEvent::release(InputAction::Left)],
        _ => Vec::new(),
    }
}

fn load_layout(path: &Path) -> Result<TileLayout, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read layout {}: {e}", path.display()))?;
    TileLayout::from_json(&text).map_err(|e| format!("Invalid layout {}: {e}", path.display()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.literal || cli.layout.is_some() {
        config.map_mode = MapMode::Literal;
    }

    let layout = match cli.layout.as_deref().map(load_layout).transpose() {
        Ok(layout) => layout,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let mut scene = match cli.scene {
        SceneKind::Gameplay => gameplay_scene(&config, layout),
        SceneKind::Pong => pong_scene(&config, layout),
    };

    if let Err(e) = scene.setup() {
        error!("Scene setup failed: {e}");
        std::process::exit(1);
    }

    let dt = config.frame_delta();
    let mut surface = RecordingSurface::new();
    let mut rounds = 0u32;
    let mut draws = 0usize;

    for frame in 0..config.frames {
        let events = scripted_input(frame, config.fps);
        surface.clear();
        if scene.frame(dt, &events, &mut surface) == FrameOutcome::RoundOver {
            rounds += 1;
            info!("Round {rounds} over at frame {frame}");
            serve_ball(&mut scene, &config);
            scene.reset_round();
        }
        draws += surface.requests.len();
    }

    info!(
        "Ran {} frames of {}: {rounds} rounds over, {draws} draw requests",
        config.frames,
        scene.name()
    );
    scene.teardown();
}
