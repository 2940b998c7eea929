//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Document sources (`.docx` packages, extracted XML)

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
pub use files::{
    document_stem, load_document_xml, DocxPackage, InputKind, MemoryPartSource, PartSource,
    XmlFileSource,
};
