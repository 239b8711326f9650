//! Error types for scene initialization.
//!
//! Only setup can fail recoverably. Everything that happens after the scene
//! is initialized either succeeds or is a precondition violation and panics.

use thiserror::Error;

use crate::scene::Phase;

/// Errors raised by the texture backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The asset path does not resolve to a file.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The backend rejected the asset.
    #[error("failed to load asset {path}: {reason}")]
    Backend { path: String, reason: String },
}

/// Errors that halt [`Scene::setup`](crate::scene::Scene::setup).
#[derive(Error, Debug)]
pub enum SceneError {
    /// A setup system could not load one of its textures.
    #[error("asset load failed: {0}")]
    Asset(#[from] AssetError),

    /// A literal tile layout contains a code with no tile kind.
    #[error("unknown tile code {code} at index {index}")]
    UnknownTileCode { code: u32, index: usize },

    /// A literal tile layout does not hold `width * height` cells.
    #[error("tile layout has {len} cells, expected {width}x{height}")]
    LayoutSize { len: usize, width: u32, height: u32 },

    /// The registered system could not be run at all.
    #[error("{phase} system #{index} could not run: {reason}")]
    SystemUnavailable {
        phase: Phase,
        index: usize,
        reason: String,
    },
}

/// Result type for setup systems.
pub type Result<T> = std::result::Result<T, SceneError>;
