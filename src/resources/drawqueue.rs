//! Pending draw requests for the current frame.
//!
//! Render systems only read gameplay state. Everything they want on screen
//! is pushed here as a [`DrawRequest`]; after the render phase the scene
//! drains the queue, in push order, into the [`DrawSurface`](crate::surface::DrawSurface).

use bevy_ecs::prelude::Resource;

use crate::resources::texturestore::TextureHandle;

/// Source rectangle inside a texture, in texels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ClipRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One draw call for the rendering backend.
///
/// A request without a texture is a filled rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRequest {
    pub texture: Option<TextureHandle>,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub clip: Option<ClipRect>,
}

impl DrawRequest {
    pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            texture: None,
            x,
            y,
            w,
            h,
            clip: None,
        }
    }

    pub fn texture(texture: TextureHandle, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            texture: Some(texture),
            ..Self::rect(x, y, w, h)
        }
    }

    pub fn with_clip(mut self, clip: ClipRect) -> Self {
        self.clip = Some(clip);
        self
    }
}

#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    requests: Vec<DrawRequest>,
}

impl DrawQueue {
    pub fn push(&mut self, request: DrawRequest) {
        self.requests.push(request);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawRequest> {
        self.requests.drain(..)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
