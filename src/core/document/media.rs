//! Image numbering and link rendering
//!
//! The media extractor saves images as `image1.png`, `image2.png`, ... per
//! kind, in the order they appear in the document. The converter reproduces
//! the same numbering so the links it writes point at those files.

use super::options::W2MOptions;
use crate::core::paragraph::ContentItem;

/// Which counter an image reference consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Raster,
    Vector,
}

/// Next sequence number per image kind, both starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCounters {
    pub raster: u32,
    pub vector: u32,
}

impl Default for ImageCounters {
    fn default() -> Self {
        Self {
            raster: 1,
            vector: 1,
        }
    }
}

impl ImageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a number for an image of `kind`
    pub fn next(&mut self, kind: ImageKind) -> u32 {
        let slot = match kind {
            ImageKind::Raster => &mut self.raster,
            ImageKind::Vector => &mut self.vector,
        };
        let n = *slot;
        *slot += 1;
        n
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `{media_root}/{document_name}_images/{DIR}/image{n}.{ext}`
pub fn image_path(options: &W2MOptions, kind: ImageKind, n: u32) -> String {
    let media = options.media(kind);
    format!(
        "{}/{}_images/{}/image{}.{}",
        options.media_root, options.document_name, media.directory, n, media.extension
    )
}

/// Image kind and display name of an image item
pub fn image_ref(item: &ContentItem) -> Option<(ImageKind, &str)> {
    match item {
        ContentItem::ImageRef { display_name, .. } => {
            Some((ImageKind::Raster, display_name.as_str()))
        }
        ContentItem::VectorImageRef { display_name, .. } => {
            Some((ImageKind::Vector, display_name.as_str()))
        }
        _ => None,
    }
}

pub fn image_markdown(display_name: &str, path: &str) -> String {
    format!("![{}]({})", display_name, path)
}
