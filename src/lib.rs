//! # wordlax
//!
//! Word document tree → Markdown converter with LaTeX math and HTML tables.
//!
//! ## Features
//!
//! - **Office Math**: `m:oMath` converted to LaTeX (fractions, scripts, radicals,
//!   n-ary operators, accents)
//! - **Script Folding**: superscript/subscript runs rebuilt into `x_{i}^{2}`
//! - **Tables**: flattened to `<table>` blocks with header detection
//! - **Images**: links numbered the way the media extractor names its files
//! - **Packages**: reads `word/document.xml` straight from a `.docx`
//!
//! ## Usage Examples
//!
//! ### Document XML
//!
//! ```rust
//! use wordlax::{docx_xml_to_markdown, W2MOptions};
//!
//! let xml = r#"<w:document
//!     xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
//!     xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">
//!   <w:body>
//!     <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
//!     <w:p><m:oMath><m:f><m:num><m:r><m:t>a</m:t></m:r></m:num>
//!       <m:den><m:r><m:t>b</m:t></m:r></m:den></m:f></m:oMath></w:p>
//!   </w:body>
//! </w:document>"#;
//!
//! let output = docx_xml_to_markdown(xml, &W2MOptions::default()).unwrap();
//! assert_eq!(output.content, "# Intro\n\n\n\n$$\n\\frac{a}{b}\n$$\n\n");
//! ```
//!
//! ### Math Only
//!
//! ```rust
//! use wordlax::omml_fragment_to_latex;
//!
//! let latex = omml_fragment_to_latex("<m:oMath><m:r><m:t>x÷2</m:t></m:r></m:oMath>").unwrap();
//! assert_eq!(latex, r"x \div 2");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core conversion types and functions
pub use core::document::{
    convert_document, ConversionState, ConversionStats, DocumentConverter, ImageCounters,
    ImageKind, MediaKind, W2MOptions,
};
pub use core::omml::omml_to_latex;
pub use core::paragraph::{paragraph_items, ContentItem};
pub use core::table::CellGrid;
pub use core::tree::{ElementKind, Node, NodeId, QName, TreeBuilder, XmlTree};

// Re-export data modules
pub use data::constants;
pub use data::symbols;

// Re-export utilities
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
pub use utils::files;
pub use utils::files::{load_document_xml, DocxPackage, PartSource};

/// Convert the text of a `word/document.xml`
///
/// # Arguments
/// * `xml` - document XML
/// * `options` - Conversion options
///
/// # Returns
/// Markdown output with warnings and statistics, or a parse error
pub fn docx_xml_to_markdown(xml: &str, options: &W2MOptions) -> ConversionResult<ConversionOutput> {
    let tree = XmlTree::parse(xml)?;
    Ok(convert_document(&tree, options))
}

/// Convert a `.docx` (or extracted `document.xml`) on disk
///
/// The document name in image paths defaults to the file stem unless
/// `options` already names the document.
pub fn convert_file(
    path: impl AsRef<std::path::Path>,
    options: &W2MOptions,
) -> ConversionResult<ConversionOutput> {
    let path = path.as_ref();
    let xml = load_document_xml(path)?;

    let mut options = options.clone();
    if options.document_name == W2MOptions::default().document_name {
        if let Some(stem) = files::document_stem(path) {
            options.document_name = stem;
        }
    }
    docx_xml_to_markdown(&xml, &options)
}

/// Convert a bare Office Math fragment (prefixes `m:`/`w:` pre-declared) to LaTeX
pub fn omml_fragment_to_latex(fragment: &str) -> ConversionResult<String> {
    let tree = XmlTree::parse_fragment(fragment)?;
    Ok(tree
        .root()
        .children()
        .map(omml_to_latex)
        .collect::<Vec<_>>()
        .concat())
}
