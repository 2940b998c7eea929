//! Core conversion modules
//!
//! This module contains the conversion pipeline, leaves first:
//! - `tree`: arena-backed document tree and traversal
//! - `omml`: Office Math → LaTeX
//! - `paragraph`: paragraph → content items, script folding
//! - `table`: table → HTML block
//! - `document`: body-level driver

pub mod document;
pub mod omml;
pub mod paragraph;
pub mod table;
pub mod tree;

// Re-export main types and functions
pub use document::{
    convert_document, ConversionState, ConversionStats, DocumentConverter, ImageCounters,
    ImageKind, MediaKind, W2MOptions,
};
pub use omml::omml_to_latex;
pub use paragraph::{merge_scripts, paragraph_items, ContentItem, ParagraphExtractor};
pub use table::{table_to_html, CellGrid};
pub use tree::{ElementKind, Node, NodeId, QName, TreeBuilder, XmlTree};
