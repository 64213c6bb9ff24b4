//! Static image gallery frame logic
//!
//! Resolves a layout once at start-up and pairs every entry with the texture
//! configured for it. The draw list never changes afterwards.

use std::collections::BTreeMap;
use std::fmt;

use spritebox_render::{AssetError, SpriteDraw, TextureKey};

use crate::layout::{Layout, LayoutError};

/// Gallery set-up error
#[derive(Debug)]
pub enum GalleryError {
    /// The layout table could not be resolved
    Layout(LayoutError),
    /// No image file configured for a layout entry
    MissingImage(String),
    /// The image for an entry failed to load
    Asset { entry: String, source: AssetError },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Layout(e) => write!(f, "{}", e),
            GalleryError::MissingImage(entry) => {
                write!(f, "No image configured for layout entry '{}'", entry)
            }
            GalleryError::Asset { entry, source } => {
                write!(f, "Failed to load image for '{}': {}", entry, source)
            }
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalleryError::Layout(e) => Some(e),
            GalleryError::MissingImage(_) => None,
            GalleryError::Asset { source, .. } => Some(source),
        }
    }
}

impl From<LayoutError> for GalleryError {
    fn from(e: LayoutError) -> Self {
        GalleryError::Layout(e)
    }
}

/// Gallery demo state
pub struct GallerySystem {
    draws: Vec<SpriteDraw>,
}

impl GallerySystem {
    /// Resolve `layout` for the screen and load each entry's image
    ///
    /// `load` receives the configured file name and returns the texture for
    /// it. Entries are loaded in table order and the first failure aborts.
    pub fn new<F>(
        layout: &Layout,
        images: &BTreeMap<String, String>,
        screen_width: u32,
        screen_height: u32,
        mut load: F,
    ) -> Result<Self, GalleryError>
    where
        F: FnMut(&str) -> Result<TextureKey, AssetError>,
    {
        let resolved = layout.resolve(screen_width, screen_height)?;
        let mut draws = Vec::with_capacity(resolved.len());

        for (entry, rect) in resolved {
            let file = images
                .get(&entry)
                .ok_or_else(|| GalleryError::MissingImage(entry.clone()))?;
            let texture = load(file).map_err(|source| GalleryError::Asset {
                entry: entry.clone(),
                source,
            })?;
            log::debug!("Placed '{}' ({}) at {:?}", entry, file, rect);
            draws.push(SpriteDraw::new(texture, rect));
        }

        Ok(Self { draws })
    }

    /// Draw list in painter's order
    pub fn draws(&self) -> &[SpriteDraw] {
        &self.draws
    }
}
