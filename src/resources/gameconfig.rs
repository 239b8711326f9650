//! Game configuration resource.
//!
//! Settings loaded from an INI file. Every key is optional; missing keys
//! keep the safe defaults below.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 800
//! height = 600
//!
//! [map]
//! mode = noise
//! width = 50
//! height = 38
//! tile_size = 16
//! scale = 2.0
//! water_threshold = 0.3
//! seed = 1234
//!
//! [simulation]
//! frames = 600
//! fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::tilemap::NoiseMapSettings;

const DEFAULT_SCREEN_WIDTH: u32 = 800;
const DEFAULT_SCREEN_HEIGHT: u32 = 600;
const DEFAULT_FRAMES: u32 = 600;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// How the world tile map is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    /// Coherent noise with a random offset.
    #[default]
    Noise,
    /// A fixed integer grid.
    Literal,
}

impl MapMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "noise" => Some(MapMode::Noise),
            "literal" => Some(MapMode::Literal),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub map_mode: MapMode,
    pub map: NoiseMapSettings,
    /// Fixes the noise offset when set.
    pub seed: Option<u64>,
    /// Frames run by the headless runner.
    pub frames: u32,
    /// Fixed simulation rate of the headless runner.
    pub fps: u32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            map_mode: MapMode::default(),
            map: NoiseMapSettings::default(),
            seed: None,
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [map] section
        if let Some(mode) = config.get("map", "mode") {
            match MapMode::parse(&mode) {
                Some(mode) => self.map_mode = mode,
                None => warn!("Unknown map mode '{mode}', keeping {:?}", self.map_mode),
            }
        }
        if let Some(width) = config.getuint("map", "width").ok().flatten() {
            self.map.width = width as u32;
        }
        if let Some(height) = config.getuint("map", "height").ok().flatten() {
            self.map.height = height as u32;
        }
        if let Some(tile_size) = config.getuint("map", "tile_size").ok().flatten() {
            self.map.tile_size = tile_size as u32;
        }
        if let Some(scale) = config.getfloat("map", "scale").ok().flatten() {
            self.map.scale = scale as f32;
        }
        if let Some(threshold) = config.getfloat("map", "water_threshold").ok().flatten() {
            self.map.water_threshold = threshold as f32;
        }
        if let Some(seed) = config.getuint("map", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [simulation] section
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames as u32;
        }
        if let Some(fps) = config.getuint("simulation", "fps").ok().flatten() {
            self.fps = (fps as u32).max(1);
        }

        info!(
            "Loaded config: {}x{} screen, {:?} map {}x{}, seed={:?}, {} frames at {} fps",
            self.screen_width,
            self.screen_height,
            self.map_mode,
            self.map.width,
            self.map.height,
            self.seed,
            self.frames,
            self.fps
        );
    }

    /// Fixed frame delta in seconds.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_starter_scene() {
        let config = GameConfig::new();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.map_mode, MapMode::Noise);
        assert_eq!(config.map.width, 50);
        assert_eq!(config.map.height, 38);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_ini_keeps_other_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[map]\nmode = literal\nseed = 99\n\n[simulation]\nfps = 30\n")
            .unwrap();
        assert_eq!(config.map_mode, MapMode::Literal);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.fps, 30);
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.map.tile_size, 16);
    }

    #[test]
    fn unknown_map_mode_is_ignored() {
        let mut config = GameConfig::new();
        config.load_from_str("[map]\nmode = lava\n").unwrap();
        assert_eq!(config.map_mode, MapMode::Noise);
    }

    #[test]
    fn float_keys_are_parsed() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[map]\nscale = 4.5\nwater_threshold = 0.45\n")
            .unwrap();
        assert!((config.map.scale - 4.5).abs() < 1e-6);
        assert!((config.map.water_threshold - 0.45).abs() < 1e-6);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/pongscene/config.ini");
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn frame_delta_follows_fps() {
        let mut config = GameConfig::new();
        config.fps = 50;
        assert!((config.frame_delta() - 0.02).abs() < 1e-6);
    }
}
