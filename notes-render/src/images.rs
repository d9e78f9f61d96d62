//! Image references resolved to textures the host has already uploaded.

use std::collections::HashMap;

use crate::primitives::{Color, Point, Size};
use crate::theme::Theme;

/// Opaque handle to a texture owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Everything the surface needs to draw an inline image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub texture: TextureId,
    pub size: Size,
    pub uv0: Point,
    pub uv1: Point,
    pub tint: Color,
    pub border: Color,
}

impl ImageInfo {
    /// Whole texture, untinted, no border.
    pub fn new(texture: TextureId, size: Size) -> Self {
        Self {
            texture,
            size,
            uv0: Point::ORIGIN,
            uv1: Point::new(1.0, 1.0),
            tint: Theme::IMAGE_TINT,
            border: Theme::IMAGE_BORDER,
        }
    }
}

/// Image lookup keyed by the href written in the markdown.
#[derive(Debug, Default, Clone)]
pub struct ImageRegistry {
    images: HashMap<String, ImageInfo>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the image for an href.
    pub fn insert(&mut self, href: impl Into<String>, info: ImageInfo) {
        self.images.insert(href.into(), info);
    }

    pub fn remove(&mut self, href: &str) -> Option<ImageInfo> {
        self.images.remove(href)
    }

    pub fn resolve(&self, href: &str) -> Option<ImageInfo> {
        self.images.get(href).copied()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
