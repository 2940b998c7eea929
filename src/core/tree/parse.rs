//! Building an [`XmlTree`] from document XML

use crate::data::constants::FRAGMENT_NAMESPACES;
use crate::utils::error::ConversionResult;

use super::arena::{NodeId, TreeBuilder, XmlTree};
use super::kind::QName;

/// Local name of the synthetic root wrapping parsed fragments
pub const FRAGMENT_ROOT: &str = "fragment";

impl XmlTree {
    /// Parse a complete XML document such as `word/document.xml`
    pub fn parse(xml: &str) -> ConversionResult<XmlTree> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(from_roxmltree(doc.root_element()))
    }

    /// Parse an XML fragment using the conventional OOXML prefixes
    ///
    /// The fragment's elements become children of a synthetic, unqualified
    /// `fragment` root, so several paragraphs or tables may be given at once.
    ///
    /// ```
    /// use wordlax::core::tree::{ElementKind, XmlTree};
    ///
    /// let tree = XmlTree::parse_fragment("<w:p><w:r><w:t>Hi</w:t></w:r></w:p>").unwrap();
    /// let p = tree.root().children().next().unwrap();
    /// assert!(p.is(ElementKind::Paragraph));
    /// ```
    pub fn parse_fragment(fragment: &str) -> ConversionResult<XmlTree> {
        let mut wrapped = String::with_capacity(fragment.len() + 512);
        wrapped.push('<');
        wrapped.push_str(FRAGMENT_ROOT);
        for (prefix, uri) in FRAGMENT_NAMESPACES {
            wrapped.push_str(&format!(" xmlns:{}=\"{}\"", prefix, uri));
        }
        wrapped.push('>');
        wrapped.push_str(fragment);
        wrapped.push_str("</");
        wrapped.push_str(FRAGMENT_ROOT);
        wrapped.push('>');
        XmlTree::parse(&wrapped)
    }
}

fn qname(name: roxmltree::ExpandedName) -> QName {
    match name.namespace() {
        Some(ns) => QName::new(ns, name.name()),
        None => QName::unqualified(name.name()),
    }
}

fn from_roxmltree(root: roxmltree::Node) -> XmlTree {
    let mut builder = TreeBuilder::new(qname(root.tag_name()));
    let root_id = builder.root();
    fill(&mut builder, root_id, root);
    builder.finish()
}

fn fill(builder: &mut TreeBuilder, id: NodeId, node: roxmltree::Node) {
    for attr in node.attributes() {
        let name = match attr.namespace() {
            Some(ns) => QName::new(ns, attr.name()),
            None => QName::unqualified(attr.name()),
        };
        builder.attr(id, name, attr.value());
    }
    for child in node.children() {
        if child.is_element() {
            let child_id = builder.child(id, qname(child.tag_name()));
            fill(builder, child_id, child);
        } else if child.is_text() {
            if let Some(text) = child.text() {
                builder.push_text(id, text);
            }
        }
    }
}
