//! Conversion options

use super::media::ImageKind;

/// Where one kind of extracted media lives and what it is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaKind {
    /// Sub-directory under `{media_root}/{document_name}_images/`
    pub directory: String,
    /// File extension, without the dot
    pub extension: String,
}

impl MediaKind {
    pub fn new(directory: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
        }
    }

    /// `PNG/*.png`, used for embedded drawings
    pub fn png() -> Self {
        Self::new("PNG", "png")
    }

    /// `WMF/*.wmf`, used for legacy vector images
    pub fn wmf() -> Self {
        Self::new("WMF", "wmf")
    }
}

/// Options for Word to Markdown conversion
#[derive(Debug, Clone)]
pub struct W2MOptions {
    /// Document name used in image paths
    /// Default: "document"
    pub document_name: String,

    /// Directory holding the `{document_name}_images` tree, relative to the output
    /// Default: "../Images"
    pub media_root: String,

    /// Layout of raster images (`w:drawing`)
    /// Default: PNG/png
    pub raster: MediaKind,

    /// Layout of vector images (`v:imagedata`)
    /// Default: WMF/wmf
    pub vector: MediaKind,

    /// Prefix for paragraphs carrying numbering properties
    /// Default: "- "
    pub list_marker: String,

    /// Render math-only paragraphs as `$$` display blocks
    /// Default: true
    pub display_math: bool,
}

impl Default for W2MOptions {
    fn default() -> Self {
        Self {
            document_name: "document".to_string(),
            media_root: "../Images".to_string(),
            raster: MediaKind::png(),
            vector: MediaKind::wmf(),
            list_marker: "- ".to_string(),
            display_math: true,
        }
    }
}

impl W2MOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with image paths pointing at `name`'s media directory
    pub fn for_document(name: impl Into<String>) -> Self {
        Self {
            document_name: name.into(),
            ..Self::default()
        }
    }

    /// Keep every formula inline, even when it stands alone in a paragraph
    pub fn inline_only() -> Self {
        Self {
            display_math: false,
            ..Self::default()
        }
    }

    pub fn media(&self, kind: ImageKind) -> &MediaKind {
        match kind {
            ImageKind::Raster => &self.raster,
            ImageKind::Vector => &self.vector,
        }
    }
}
