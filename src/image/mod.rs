//! Image lookup for recipe pictures.
//!
//! Recipes store image paths like `/imagenes/paella.jpg`. The core never
//! reads image bytes: an [`ImageResolver`] decides whether a stored path
//! points at something displayable. Resizing to the [`ImageVariant`]
//! dimensions is left to the UI layer.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

/// Where an image is going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    /// Square card picture on the listing
    Thumbnail,
    /// Wide picture at the top of the detail view
    Hero,
}

impl ImageVariant {
    /// Target `(width, height)` in pixels, cropped to cover.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            ImageVariant::Thumbnail => (200, 200),
            ImageVariant::Hero => (800, 500),
        }
    }
}

/// Turns a stored image path into something the UI can display.
///
/// [`FsImageResolver`] only checks that the file exists and never decodes it.
/// A resolver that decodes or resizes should return `None` for files that
/// fail to decode.
pub trait ImageResolver {
    type Image;

    /// Returns `None` when there is nothing to show. A missing image is not an error.
    fn resolve(&self, stored: &str, variant: ImageVariant) -> Option<Self::Image>;
}

/// An image file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: Utf8PathBuf,
    pub variant: ImageVariant,
}

/// Resolves stored paths against a root directory on the filesystem.
#[derive(Debug, Clone)]
pub struct FsImageResolver {
    root: Utf8PathBuf,
}

impl FsImageResolver {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        FsImageResolver { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl ImageResolver for FsImageResolver {
    type Image = ResolvedImage;

    fn resolve(&self, stored: &str, variant: ImageVariant) -> Option<ResolvedImage> {
        // stored paths are relative to the root even with a leading slash
        let relative = stored.trim().trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        let path = self.root.join(relative);
        if path.is_file() {
            Some(ResolvedImage { path, variant })
        } else {
            debug!("No image at {path}");
            None
        }
    }
}
