//! Desktop implementation of the renderer's host capabilities.

use notes_render::{ImageInfo, ImageRegistry, RenderCapabilities};

use crate::platform::{LinkOpener, SystemOpener};

pub struct DesktopCapabilities<O = SystemOpener> {
    images: ImageRegistry,
    opener: O,
}

impl DesktopCapabilities<SystemOpener> {
    pub fn new(images: ImageRegistry) -> Self {
        Self::with_opener(images, SystemOpener)
    }
}

impl<O: LinkOpener> DesktopCapabilities<O> {
    pub fn with_opener(images: ImageRegistry, opener: O) -> Self {
        Self { images, opener }
    }

    pub fn images_mut(&mut self) -> &mut ImageRegistry {
        &mut self.images
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

impl<O: LinkOpener> RenderCapabilities for DesktopCapabilities<O> {
    fn open_link(&self, href: &str) {
        self.opener.open(href);
    }

    fn resolve_image(&self, href: &str) -> Option<ImageInfo> {
        self.images.resolve(href)
    }
}
