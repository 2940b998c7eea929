//! Paragraph content extraction
//!
//! A paragraph is turned into an ordered list of [`ContentItem`]s by
//! [`ParagraphExtractor`], then [`merge_scripts`] folds script runs into the
//! text they belong to. Rendering the items is left to the callers (the
//! document assembler and the table flattener), which format them differently.

pub mod extract;
pub mod merge;

pub use extract::{extract_paragraph, ParagraphExtractor};
pub use merge::merge_scripts;

/// One classified unit of paragraph content, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text(String),
    /// LaTeX source, without delimiters
    Math(String),
    Superscript(String),
    Subscript(String),
    /// Embedded raster image (`w:drawing`)
    ImageRef {
        relationship_id: String,
        display_name: String,
    },
    /// Legacy vector image (`v:imagedata`)
    VectorImageRef {
        relationship_id: String,
        display_name: String,
    },
}

impl ContentItem {
    /// Text item with visible content
    pub fn is_visible_text(&self) -> bool {
        matches!(self, ContentItem::Text(t) if !t.trim().is_empty())
    }

    pub fn is_math(&self) -> bool {
        matches!(self, ContentItem::Math(_))
    }
}

/// Extract and merge in one step
pub fn paragraph_items(paragraph: crate::core::tree::Node) -> Vec<ContentItem> {
    merge_scripts(extract_paragraph(paragraph))
}
