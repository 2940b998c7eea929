//! Paragraph subtree → content items

use crate::core::omml::{omml_to_latex, vertical_align};
use crate::core::tree::{walk, ElementKind, Node, VisitedSet, Walk};
use crate::data::constants::{
    find_by_rules, DEFAULT_IMAGE_NAME, IMAGE_TITLE_ATTRS, NS_R, NS_W, RELATIONSHIP_ID_ATTRS,
    UNDERLINE_FILL,
};
use crate::utils::error::{ConversionWarning, WarningKind};

use super::ContentItem;

/// Recursive paragraph walker
///
/// The extractor keeps a [`VisitedSet`] for the paragraph being processed so
/// that a node handled as a special case (a math group inside a run, say) is
/// never emitted a second time by the generic recursion. Recoverable problems
/// are collected as warnings.
#[derive(Debug, Default)]
pub struct ParagraphExtractor {
    visited: VisitedSet,
    warnings: Vec<ConversionWarning>,
}

impl ParagraphExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the content items of one paragraph (before script merging)
    pub fn extract(&mut self, paragraph: Node) -> Vec<ContentItem> {
        self.visited = VisitedSet::new();
        let mut items = Vec::new();
        self.visit(paragraph, &mut items);
        items
    }

    /// Warnings collected so far; the list is emptied
    pub fn take_warnings(&mut self) -> Vec<ConversionWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn visit(&mut self, node: Node, items: &mut Vec<ContentItem>) {
        if !self.visited.mark(node.id()) {
            return;
        }

        match node.kind() {
            ElementKind::Math | ElementKind::MathPara => self.push_math(node, items),
            ElementKind::Run => self.visit_run(node, items),
            // Tables belong to the table flattener
            ElementKind::Table => {}
            _ => {
                for child in node.children() {
                    self.visit(child, items);
                }
            }
        }
    }

    fn push_math(&mut self, group: Node, items: &mut Vec<ContentItem>) {
        let latex = omml_to_latex(group);
        if latex.trim().is_empty() {
            self.warn(ConversionWarning::new(
                WarningKind::EmptyMath,
                "math group produced no LaTeX",
            ));
        } else {
            items.push(ContentItem::Math(latex));
        }
    }

    fn visit_run(&mut self, run: Node, items: &mut Vec<ContentItem>) {
        let mut groups = Vec::new();
        walk(run, |n| {
            if n.kind().is_math_group() {
                groups.push(n);
                Walk::SkipChildren
            } else {
                Walk::Continue
            }
        });

        if !groups.is_empty() {
            for group in groups {
                if self.visited.mark(group.id()) {
                    self.push_math(group, items);
                }
            }
            return;
        }

        let underlined = is_underlined(run);
        let script = vertical_align(run);
        let mut text = String::new();

        walk(run, |n| {
            match n.kind() {
                ElementKind::Text => {
                    let fragment = n.text().unwrap_or_default();
                    if underlined {
                        text.extend(fragment.chars().map(|c| {
                            if c.is_whitespace() || c == '\u{3000}' {
                                UNDERLINE_FILL
                            } else {
                                c
                            }
                        }));
                    } else {
                        text.push_str(fragment);
                    }
                }
                ElementKind::Break | ElementKind::CarriageReturn => text.push('\n'),
                ElementKind::Drawing => {
                    flush_text(&mut text, script, items);
                    if let Some(item) = self.drawing_item(n) {
                        items.push(item);
                    }
                }
                ElementKind::ImageData => {
                    flush_text(&mut text, script, items);
                    if let Some(item) = self.vector_item(n) {
                        items.push(item);
                    }
                }
                _ => {}
            }
            Walk::Continue
        });
        flush_text(&mut text, script, items);
    }

    fn drawing_item(&mut self, drawing: Node) -> Option<ContentItem> {
        let frame = drawing
            .find(ElementKind::Inline)
            .or_else(|| drawing.find(ElementKind::Anchor))?;
        let display_name = frame
            .find(ElementKind::DocProps)
            .and_then(|props| props.attr_local("name"))
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_IMAGE_NAME)
            .to_string();
        let blip = frame.find(ElementKind::Blip)?;

        match blip
            .attr(NS_R, "embed")
            .or_else(|| blip.attr(NS_R, "link"))
            .filter(|id| !id.is_empty())
        {
            Some(id) => Some(ContentItem::ImageRef {
                relationship_id: id.to_string(),
                display_name,
            }),
            None => {
                self.warn(ConversionWarning::new(
                    WarningKind::DroppedImage,
                    format!("drawing '{}' has no relationship id", display_name),
                ));
                None
            }
        }
    }

    fn vector_item(&mut self, data: Node) -> Option<ContentItem> {
        let display_name = IMAGE_TITLE_ATTRS
            .iter()
            .find_map(|attr| data.attr_local(attr).filter(|v| !v.is_empty()))
            .unwrap_or(DEFAULT_IMAGE_NAME)
            .to_string();

        match find_by_rules(RELATIONSHIP_ID_ATTRS, data.attributes()).filter(|id| !id.is_empty()) {
            Some(id) => Some(ContentItem::VectorImageRef {
                relationship_id: id.to_string(),
                display_name,
            }),
            None => {
                self.warn(
                    ConversionWarning::new(
                        WarningKind::DroppedImage,
                        format!("vector image '{}' has no relationship id", display_name),
                    )
                    .with_suggestion("expected an r:id attribute on imagedata"),
                );
                None
            }
        }
    }

    fn warn(&mut self, warning: ConversionWarning) {
        self.warnings.push(warning);
    }
}

/// Extract a paragraph's items, discarding warnings
pub fn extract_paragraph(paragraph: Node) -> Vec<ContentItem> {
    ParagraphExtractor::new().extract(paragraph)
}

/// `w:rPr/w:u` present with a value other than `none`
fn is_underlined(run: Node) -> bool {
    run.child(ElementKind::RunProps)
        .and_then(|props| props.child(ElementKind::Underline))
        .is_some_and(|u| u.attr(NS_W, "val") != Some("none"))
}

fn flush_text(text: &mut String, script: Option<&str>, items: &mut Vec<ContentItem>) {
    if text.is_empty() {
        return;
    }
    let text = std::mem::take(text);
    items.push(match script {
        Some("superscript") => ContentItem::Superscript(text),
        Some("subscript") => ContentItem::Subscript(text),
        _ => ContentItem::Text(text),
    });
}
