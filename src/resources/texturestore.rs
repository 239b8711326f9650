//! Texture registry.
//!
//! The scene core never decodes images. It asks a [`TextureBackend`] for an
//! opaque [`TextureHandle`] during setup, remembers it keyed by asset path
//! and shader variant, and hands the handle to the draw surface at render
//! time. Teardown releases every variant of a path in one call.

use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

use crate::error::AssetError;

/// Opaque handle issued by a [`TextureBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Platform side of texture management.
///
/// `variant` names a per-pixel shader applied at load time; `None` is the
/// untouched image.
pub trait TextureBackend: Send + Sync {
    fn load(&mut self, path: &str, variant: Option<&str>) -> Result<TextureHandle, AssetError>;
    fn unload(&mut self, handle: TextureHandle);
}

/// Backend without a GPU. Issues sequential handles.
///
/// With an asset root set, a path that does not exist under it fails with
/// [`AssetError::NotFound`], which is enough to exercise setup failures.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    root: Option<PathBuf>,
    next: u32,
    live: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Number of handles loaded and not yet unloaded.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl TextureBackend for HeadlessBackend {
    fn load(&mut self, path: &str, _variant: Option<&str>) -> Result<TextureHandle, AssetError> {
        if let Some(root) = &self.root {
            if !root.join(path).is_file() {
                return Err(AssetError::NotFound(path.to_string()));
            }
        }
        let handle = TextureHandle(self.next);
        self.next += 1;
        self.live += 1;
        Ok(handle)
    }

    fn unload(&mut self, _handle: TextureHandle) {
        self.live = self.live.saturating_sub(1);
    }
}

type TextureKey = (String, Option<String>);

/// Loaded textures keyed by asset path and shader variant.
#[derive(Resource)]
pub struct TextureStore {
    backend: Box<dyn TextureBackend>,
    map: FxHashMap<TextureKey, TextureHandle>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new(HeadlessBackend::new())
    }
}

impl TextureStore {
    pub fn new(backend: impl TextureBackend + 'static) -> Self {
        TextureStore {
            backend: Box::new(backend),
            map: FxHashMap::default(),
        }
    }

    /// Load `name` with an optional shader variant, reusing the cached handle
    /// when the pair is already loaded.
    pub fn load(&mut self, name: &str, variant: Option<&str>) -> Result<TextureHandle, AssetError> {
        let key = (name.to_string(), variant.map(str::to_string));
        if let Some(handle) = self.map.get(&key) {
            return Ok(*handle);
        }
        let handle = self.backend.load(name, variant)?;
        debug!("Loaded texture {name} ({variant:?}) as {handle:?}");
        self.map.insert(key, handle);
        Ok(handle)
    }

    /// Release every variant of `name`. Unknown names are ignored.
    pub fn unload(&mut self, name: &str) {
        let backend = &mut self.backend;
        self.map.retain(|(path, variant), handle| {
            if path == name {
                debug!("Unloading texture {path} ({variant:?})");
                backend.unload(*handle);
                false
            } else {
                true
            }
        });
    }

    pub fn get(&self, name: &str, variant: Option<&str>) -> Option<TextureHandle> {
        self.map
            .get(&(name.to_string(), variant.map(str::to_string)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
