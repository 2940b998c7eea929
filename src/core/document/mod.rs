//! Document assembler
//!
//! Drives a conversion over the body of a `w:document`: paragraphs become
//! Markdown lines (headings, list items, inline or display math, image
//! links), tables become HTML blocks, and the non-empty blocks are joined
//! with blank lines.
//!
//! # Module Structure
//!
//! - `options`: [`W2MOptions`] and the media layout
//! - `media`: image counters and link paths
//! - `state`: [`ConversionState`] and [`ConversionStats`]

pub mod media;
mod options;
mod state;

pub use media::{ImageCounters, ImageKind};
pub use options::{MediaKind, W2MOptions};
pub use state::{ConversionState, ConversionStats};

use crate::core::paragraph::ContentItem;
use crate::core::table::table_to_html;
use crate::core::tree::{ElementKind, Node, XmlTree};
use crate::data::constants::{MAX_HEADING_LEVEL, NS_W};
use crate::utils::error::ConversionOutput;

/// Converter for whole documents
///
/// The image counters belong to the converter and keep running across
/// [`convert`](Self::convert) calls until [`reset_counters`](Self::reset_counters)
/// is called, so several parts can be numbered as one sequence.
#[derive(Debug)]
pub struct DocumentConverter {
    options: W2MOptions,
    state: ConversionState,
}

impl DocumentConverter {
    pub fn new(options: W2MOptions) -> Self {
        Self::with_counters(options, ImageCounters::default())
    }

    /// Start numbering images from `counters` instead of 1
    pub fn with_counters(options: W2MOptions, counters: ImageCounters) -> Self {
        Self {
            options,
            state: ConversionState::new(counters),
        }
    }

    pub fn options(&self) -> &W2MOptions {
        &self.options
    }

    pub fn counters(&self) -> ImageCounters {
        self.state.counters
    }

    pub fn reset_counters(&mut self) {
        self.state.counters.reset();
    }

    /// Convert a parsed document
    pub fn convert(&mut self, tree: &XmlTree) -> ConversionOutput {
        log::debug!("converting tree of {} elements", tree.len());
        self.convert_node(tree.root())
    }

    /// Convert the body found under `root` (or `root` itself when it has no `w:body`)
    pub fn convert_node(&mut self, root: Node) -> ConversionOutput {
        self.state.stats = ConversionStats::default();
        self.state.warnings.clear();

        let body = root.find(ElementKind::Body).unwrap_or(root);
        let mut blocks = Vec::new();

        for (i, node) in body.children().enumerate() {
            log::debug!("body node #{} <{}>", i + 1, node.local_name());
            match node.kind() {
                ElementKind::Table | ElementKind::Paragraph => self.push_block(node, &mut blocks),
                _ => {
                    self.state.stats.other += 1;
                    for sub in node.children() {
                        if matches!(sub.kind(), ElementKind::Table | ElementKind::Paragraph) {
                            self.push_block(sub, &mut blocks);
                        }
                    }
                }
            }
        }

        let stats = self.state.stats;
        log::debug!(
            "converted {} paragraphs, {} tables, {} math items, {} images ({} other nodes)",
            stats.paragraphs,
            stats.tables,
            stats.math,
            stats.images(),
            stats.other
        );

        ConversionOutput {
            content: blocks.join("\n\n"),
            warnings: std::mem::take(&mut self.state.warnings),
            stats,
            counters: self.state.counters,
        }
    }

    fn push_block(&mut self, node: Node, blocks: &mut Vec<String>) {
        if node.is(ElementKind::Table) {
            let html = self.table_to_html(node);
            if !html.is_empty() {
                self.state.stats.tables += 1;
                blocks.push(html);
            }
        } else if let Some(line) = self.paragraph_to_markdown(node) {
            self.state.stats.paragraphs += 1;
            blocks.push(line);
        }
    }

    /// Flatten one `w:tbl`
    pub fn table_to_html(&mut self, table: Node) -> String {
        table_to_html(table, &mut self.state, &self.options)
    }

    /// Render one `w:p`
    ///
    /// `None` when the paragraph has no visible content and no heading or
    /// list prefix. A styled but empty paragraph keeps its bare prefix.
    pub fn paragraph_to_markdown(&mut self, paragraph: Node) -> Option<String> {
        let items = self.state.paragraph_items(paragraph);

        let has_math = items.iter().any(ContentItem::is_math);
        let has_text = items.iter().any(ContentItem::is_visible_text);
        let display = self.options.display_math && has_math && !has_text;

        let body = if display {
            self.render_display(&items)
        } else {
            self.render_inline(&items)
        };

        let mut line = String::new();
        let props = paragraph.child(ElementKind::ParagraphProps);
        if props.is_some_and(|p| p.child(ElementKind::Numbering).is_some()) {
            line.push_str(&self.options.list_marker);
        }
        if let Some(level) = props.and_then(heading_level) {
            line.push_str(&"#".repeat(level));
            line.push(' ');
        }

        if body.trim().is_empty() {
            if line.is_empty() {
                return None;
            }
            return Some(line);
        }
        self.state.stats.math += items.iter().filter(|i| i.is_math()).count();

        line.push_str(&body);
        Some(line)
    }

    /// Math-only paragraph: each run of consecutive formulas becomes one `$$` block
    fn render_display(&mut self, items: &[ContentItem]) -> String {
        let mut out = String::new();
        let mut pending = String::new();

        for item in items {
            match item {
                ContentItem::Math(latex) => pending.push_str(latex),
                ContentItem::ImageRef { .. } | ContentItem::VectorImageRef { .. } => {
                    flush_display(&mut pending, &mut out);
                    self.push_image(item, &mut out);
                }
                // Only whitespace reaches here
                ContentItem::Text(_) | ContentItem::Superscript(_) | ContentItem::Subscript(_) => {}
            }
        }
        flush_display(&mut pending, &mut out);
        out
    }

    fn render_inline(&mut self, items: &[ContentItem]) -> String {
        let mut out = String::new();
        for item in items {
            match item {
                ContentItem::Text(text) => out.push_str(text),
                ContentItem::Math(latex) => {
                    out.push_str(" $ ");
                    out.push_str(latex);
                    out.push_str(" $ ");
                }
                ContentItem::Superscript(text) => {
                    out.push_str("^{");
                    out.push_str(text);
                    out.push('}');
                }
                ContentItem::Subscript(text) => {
                    out.push_str("_{");
                    out.push_str(text);
                    out.push('}');
                }
                ContentItem::ImageRef { .. } | ContentItem::VectorImageRef { .. } => {
                    self.push_image(item, &mut out)
                }
            }
        }
        out.trim_end_matches(' ').to_string()
    }

    fn push_image(&mut self, item: &ContentItem, out: &mut String) {
        if let Some((kind, name)) = media::image_ref(item) {
            out.push_str(&self.state.image_link(&self.options, kind, name));
        }
    }
}

fn flush_display(pending: &mut String, out: &mut String) {
    if pending.is_empty() {
        return;
    }
    out.push_str("\n\n$$\n");
    out.push_str(pending);
    out.push_str("\n$$\n\n");
    pending.clear();
}

/// Heading level from `w:pStyle@w:val` (`Heading2`, `heading 3`, ...)
fn heading_level(props: Node) -> Option<usize> {
    let style = props.child(ElementKind::ParagraphStyle)?.attr(NS_W, "val")?;
    if !style.to_ascii_lowercase().starts_with("heading") {
        return None;
    }
    let digits: String = style.chars().filter(char::is_ascii_digit).collect();
    let level = if digits.is_empty() {
        1
    } else {
        digits.parse().unwrap_or(MAX_HEADING_LEVEL)
    };
    Some(level.clamp(1, MAX_HEADING_LEVEL))
}

/// Convert a parsed document with fresh image counters
pub fn convert_document(tree: &XmlTree, options: &W2MOptions) -> ConversionOutput {
    DocumentConverter::new(options.clone()).convert(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(body: &str) -> XmlTree {
        XmlTree::parse_fragment(&format!("<w:document><w:body>{}</w:body></w:document>", body))
            .unwrap()
    }

    fn convert(body: &str) -> ConversionOutput {
        convert_document(&document(body), &W2MOptions::for_document("doc"))
    }

    fn run(text: &str) -> String {
        format!("<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>", text)
    }

    const PI: &str = "<m:oMath><m:r><m:t>π</m:t></m:r></m:oMath>";

    #[test]
    fn test_plain_paragraphs_joined() {
        let out = convert(&format!("<w:p>{}</w:p><w:p/><w:p>{}</w:p>", run("a"), run("b")));
        assert_eq!(out.content, "a\n\nb");
        assert_eq!(out.stats.paragraphs, 2);
    }

    #[test]
    fn test_heading_levels() {
        let heading = |style: &str| {
            format!(
                "<w:p><w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>{}</w:p>",
                style,
                run("T")
            )
        };
        let body = [
            heading("Heading2"),
            heading("heading"),
            heading("Heading9"),
            heading("Title"),
        ]
        .concat();
        assert_eq!(convert(&body).content, "## T\n\n# T\n\n###### T\n\nT");
    }

    #[test]
    fn test_list_item() {
        let out = convert(&format!(
            "<w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/></w:numPr></w:pPr>{}</w:p>",
            run("item")
        ));
        assert_eq!(out.content, "- item");
    }

    #[test]
    fn test_empty_heading_and_list_keep_prefix() {
        let out = convert(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr></w:p>\
             <w:p><w:pPr><w:pStyle w:val=\"Normal\"/></w:pPr></w:p>\
             <w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/></w:numPr></w:pPr><w:r><w:t> </w:t></w:r></w:p>",
        );
        assert_eq!(out.content, "# \n\n- ");
        assert_eq!(out.stats.paragraphs, 2);
    }

    #[test]
    fn test_display_math() {
        let out = convert(&format!("<w:p>{}</w:p>", PI));
        assert_eq!(out.content, "\n\n$$\n \\pi \n$$\n\n");
        assert_eq!(out.stats.math, 1);
    }

    #[test]
    fn test_inline_math() {
        let out = convert(&format!("<w:p>{}{}</w:p>", run("Value: "), PI));
        assert_eq!(out.content, "Value:  $  \\pi  $");
    }

    #[test]
    fn test_math_stats_count_folded_scripts() {
        let sup = "<w:r><w:rPr><w:vertAlign w:val=\"superscript\"/></w:rPr><w:t>2</w:t></w:r>";
        let out = convert(&format!("<w:p>{}{}{}{}</w:p>", run("x"), sup, run(" and "), PI));
        assert_eq!(out.content, " $ x^{2} $  and  $  \\pi  $");
        assert_eq!(out.stats.math, 2);
    }

    #[test]
    fn test_inline_only_option() {
        let options = W2MOptions::inline_only();
        let out = convert_document(&document(&format!("<w:p>{}</w:p>", PI)), &options);
        assert_eq!(out.content, " $  \\pi  $");
    }

    #[test]
    fn test_consecutive_display_math_coalesce() {
        let a = "<m:oMath><m:r><m:t>a</m:t></m:r></m:oMath>";
        let b = "<m:oMath><m:r><m:t>=b</m:t></m:r></m:oMath>";
        let out = convert(&format!("<w:p>{}{}{}</w:p>", a, run(" "), b));
        assert_eq!(out.content, "\n\n$$\na=b\n$$\n\n");
    }

    #[test]
    fn test_images_numbered_per_kind() {
        let drawing = "<w:r><w:drawing><wp:inline><wp:docPr id=\"1\" name=\"Pic\"/>\
                       <a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed=\"rId1\"/>\
                       </pic:blipFill></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>";
        let vector = "<w:r><w:pict><v:imagedata r:id=\"rId2\"/></w:pict></w:r>";
        let out = convert(&format!(
            "<w:p>{d}</w:p><w:p>{v}{d}</w:p>",
            d = drawing,
            v = vector
        ));
        assert_eq!(
            out.content,
            "![Pic](../Images/doc_images/PNG/image1.png)\n\n\
             ![Image](../Images/doc_images/WMF/image1.wmf)![Pic](../Images/doc_images/PNG/image2.png)"
        );
        assert_eq!(out.counters, ImageCounters { raster: 3, vector: 2 });
        assert_eq!(out.stats.images(), 3);
    }

    #[test]
    fn test_table_block() {
        let out = convert(&format!(
            "<w:p>{}</w:p><w:tbl><w:tr><w:tc><w:p>{}</w:p></w:tc></w:tr></w:tbl>",
            run("before"),
            run("h")
        ));
        assert!(out.content.starts_with("before\n\n\n\n<table border=\"1\">"));
        assert!(out.content.ends_with("</table>\n\n"));
        assert_eq!(out.stats.tables, 1);
    }

    #[test]
    fn test_one_level_recursion() {
        let out = convert(&format!(
            "<w:sdt><w:sdtContent><w:p>{}</w:p></w:sdtContent></w:sdt>\
             <w:customXml><w:p>{}</w:p></w:customXml>",
            run("deep"),
            run("shallow")
        ));
        assert_eq!(out.content, "shallow");
        assert_eq!(out.stats.other, 2);
    }

    #[test]
    fn test_root_without_body() {
        let tree = XmlTree::parse_fragment(&format!("<w:p>{}</w:p>", run("x"))).unwrap();
        let out = convert_document(&tree, &W2MOptions::default());
        assert_eq!(out.content, "x");
    }

    #[test]
    fn test_counters_carry_over_until_reset() {
        let tree = document("<w:p><w:r><w:pict><v:imagedata r:id=\"rId2\"/></w:pict></w:r></w:p>");
        let mut converter = DocumentConverter::new(W2MOptions::for_document("doc"));
        let first = converter.convert(&tree);
        let second = converter.convert(&tree);
        assert!(first.content.ends_with("image1.wmf)"));
        assert!(second.content.ends_with("image2.wmf)"));

        converter.reset_counters();
        assert_eq!(converter.convert(&tree).content, first.content);
    }

    #[test]
    fn test_with_counters() {
        let tree = document("<w:p><w:r><w:pict><v:imagedata r:id=\"rId2\"/></w:pict></w:r></w:p>");
        let mut converter = DocumentConverter::with_counters(
            W2MOptions::for_document("doc"),
            ImageCounters {
                raster: 1,
                vector: 4,
            },
        );
        assert!(converter.convert(&tree).content.ends_with("image4.wmf)"));
        assert_eq!(converter.counters().vector, 5);
    }

    #[test]
    fn test_warnings_reach_output() {
        let out = convert("<w:p><w:r><w:pict><v:imagedata/></w:pict></w:r></w:p><w:tbl/>");
        assert_eq!(out.content, "");
        assert_eq!(out.warnings.len(), 2);
    }
}
