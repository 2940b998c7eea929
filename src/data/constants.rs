//! Namespaces, attribute fallbacks and naming defaults
//!
//! Everything the transpiler needs to know about WordprocessingML that is
//! plain data rather than logic lives here, so the lookup rules can be tested
//! in isolation.

/// WordprocessingML main namespace (`w:`)
pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office Math Markup namespace (`m:`)
pub const NS_M: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
/// Word drawing namespace (`wp:`)
pub const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// DrawingML main namespace (`a:`)
pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// DrawingML picture namespace (`pic:`)
pub const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
/// Relationships namespace (`r:`)
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Legacy VML namespace (`v:`)
pub const NS_V: &str = "urn:schemas-microsoft-com:vml";
/// Legacy Office namespace (`o:`)
pub const NS_O: &str = "urn:schemas-microsoft-com:office:office";

/// Prefix declarations used when wrapping an XML fragment
pub const FRAGMENT_NAMESPACES: &[(&str, &str)] = &[
    ("w", NS_W),
    ("m", NS_M),
    ("wp", NS_WP),
    ("a", NS_A),
    ("pic", NS_PIC),
    ("r", NS_R),
    ("v", NS_V),
    ("o", NS_O),
];

/// Part name of the main document inside a `.docx` package
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Display name used for images that carry none
pub const DEFAULT_IMAGE_NAME: &str = "Image";

/// Deepest Markdown heading level
pub const MAX_HEADING_LEVEL: usize = 6;

/// Line break marker used inside HTML table cells
pub const CELL_LINE_BREAK: &str = "<br/>";

/// Fill character replacing whitespace in underlined runs
pub const UNDERLINE_FILL: char = '_';

/// One rule for locating a relationship identifier among an element's attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrMatch {
    /// Exact namespace and local name
    Qualified(&'static str, &'static str),
    /// Any namespaced attribute with this local name
    AnyNamespace(&'static str),
    /// Any attribute whose local name ends with this suffix (ASCII case-insensitive)
    LocalSuffix(&'static str),
}

impl AttrMatch {
    /// Check an attribute name against this rule
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        match *self {
            AttrMatch::Qualified(ns, name) => namespace == Some(ns) && local == name,
            AttrMatch::AnyNamespace(name) => namespace.is_some() && local == name,
            AttrMatch::LocalSuffix(suffix) => {
                let (local, suffix) = (local.as_bytes(), suffix.as_bytes());
                local.len() >= suffix.len()
                    && local[local.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
            }
        }
    }
}

/// Accepted spellings of the relationship id on legacy `imagedata`, in priority order
pub const RELATIONSHIP_ID_ATTRS: &[AttrMatch] = &[
    AttrMatch::Qualified(NS_R, "id"),
    AttrMatch::AnyNamespace("id"),
    AttrMatch::LocalSuffix("id"),
];

/// Attribute local names carrying a display name on legacy `imagedata`, in priority order
pub const IMAGE_TITLE_ATTRS: &[&str] = &["title", "alt"];

/// Find the first attribute value accepted by `rules`, honouring rule priority
///
/// Each rule is tried against every attribute (in document order) before the
/// next rule is consulted.
pub fn find_by_rules<'a, I>(rules: &[AttrMatch], attrs: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (Option<&'a str>, &'a str, &'a str)>,
    I::IntoIter: Clone,
{
    let attrs = attrs.into_iter();
    rules.iter().find_map(|rule| {
        attrs
            .clone()
            .find(|(ns, local, _)| rule.matches(*ns, local))
            .map(|(_, _, value)| value)
    })
}
