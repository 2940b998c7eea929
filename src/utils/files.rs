//! Document sources
//!
//! The converter works on the text of `word/document.xml`. Where that text
//! comes from is abstracted by the [`PartSource`] trait:
//! - `DocxPackage`: parts read from a `.docx` (zip) archive
//! - `XmlFileSource`: a `document.xml` already extracted to disk
//! - `MemoryPartSource`: in-memory parts, for tests

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::data::constants::DOCUMENT_PART;
use crate::utils::error::{ConversionError, ConversionResult};

/// Trait for reading named parts of a Word package
pub trait PartSource {
    /// Read a part's contents as UTF-8 text
    fn read_part(&mut self, name: &str) -> ConversionResult<String>;

    /// Check if a part exists
    fn has_part(&mut self, name: &str) -> bool;

    /// The main document part
    fn document_xml(&mut self) -> ConversionResult<String> {
        self.read_part(DOCUMENT_PART)
    }
}

/// A `.docx` package
pub struct DocxPackage<R> {
    archive: ZipArchive<R>,
}

impl DocxPackage<File> {
    pub fn open(path: impl AsRef<Path>) -> ConversionResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConversionError::IoError {
            message: format!("{}: {}", e, path.display()),
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> DocxPackage<R> {
    pub fn from_reader(reader: R) -> ConversionResult<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Names of all entries, in archive order
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }
}

impl<R: Read + Seek> PartSource for DocxPackage<R> {
    fn read_part(&mut self, name: &str) -> ConversionResult<String> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(ConversionError::missing_part(name)),
            Err(e) => return Err(e.into()),
        };
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        Ok(content)
    }

    fn has_part(&mut self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }
}

/// A `document.xml` on disk, served as the main document part
pub struct XmlFileSource {
    path: PathBuf,
}

impl XmlFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PartSource for XmlFileSource {
    fn read_part(&mut self, name: &str) -> ConversionResult<String> {
        if name != DOCUMENT_PART {
            return Err(ConversionError::missing_part(name));
        }
        std::fs::read_to_string(&self.path).map_err(|e| ConversionError::IoError {
            message: format!("{}: {}", e, self.path.display()),
        })
    }

    fn has_part(&mut self, name: &str) -> bool {
        name == DOCUMENT_PART && self.path.is_file()
    }
}

/// In-memory parts (for testing)
#[derive(Debug, Default)]
pub struct MemoryPartSource {
    parts: HashMap<String, String>,
}

impl MemoryPartSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source holding only the main document part
    pub fn with_document(xml: &str) -> Self {
        let mut source = Self::new();
        source.add_part(DOCUMENT_PART, xml);
        source
    }

    pub fn add_part(&mut self, name: &str, content: &str) {
        self.parts.insert(name.to_string(), content.to_string());
    }
}

impl PartSource for MemoryPartSource {
    fn read_part(&mut self, name: &str) -> ConversionResult<String> {
        self.parts
            .get(name)
            .cloned()
            .ok_or_else(|| ConversionError::missing_part(name))
    }

    fn has_part(&mut self, name: &str) -> bool {
        self.parts.contains_key(name)
    }
}

/// Input formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Docx,
    Xml,
    /// Binary Word 97-2003 document
    LegacyDoc,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" | "docm" => Some(InputKind::Docx),
            "xml" => Some(InputKind::Xml),
            "doc" => Some(InputKind::LegacyDoc),
            _ => None,
        }
    }
}

/// Read the main document XML from a `.docx` or a bare `.xml` file
pub fn load_document_xml(path: impl AsRef<Path>) -> ConversionResult<String> {
    let path = path.as_ref();
    match InputKind::from_path(path) {
        Some(InputKind::Docx) => DocxPackage::open(path)?.document_xml(),
        Some(InputKind::Xml) => XmlFileSource::new(path).document_xml(),
        Some(InputKind::LegacyDoc) => Err(ConversionError::unsupported_with_suggestion(
            "legacy .doc input",
            "Save the file as .docx first",
        )),
        None => Err(ConversionError::invalid(format!(
            "unrecognised input '{}': expected .docx or .xml",
            path.display()
        ))),
    }
}

/// File stem used as the document name in image paths
pub fn document_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}
