//! Table cell text

use crate::core::document::media::image_ref;
use crate::core::document::{ConversionState, W2MOptions};
use crate::core::paragraph::ContentItem;
use crate::core::tree::{ElementKind, Node};
use crate::data::constants::CELL_LINE_BREAK;

/// Render a `w:tc` as one line of cell HTML
///
/// Only direct `w:p` children are read; paragraphs are joined with `<br/>`.
pub fn cell_text(cell: Node, state: &mut ConversionState, options: &W2MOptions) -> String {
    let mut paragraphs = Vec::new();
    for p in cell.children().filter(|n| n.is(ElementKind::Paragraph)) {
        let items = state.paragraph_items(p);
        let text = render_inline(&items, state, options);
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }
    paragraphs.join(CELL_LINE_BREAK).trim().to_string()
}

/// Flat rendering of folded items: text as is, math as `$..$`, images as links
pub fn render_inline(
    items: &[ContentItem],
    state: &mut ConversionState,
    options: &W2MOptions,
) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            ContentItem::Text(text) => out.push_str(text),
            ContentItem::Math(latex) => {
                out.push('$');
                out.push_str(latex.trim());
                out.push('$');
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
                if let Some((kind, name)) = image_ref(item) {
                    out.push_str(&state.image_link(options, kind, name));
                }
            }
        }
    }
    out.replace('\n', CELL_LINE_BREAK).trim().to_string()
}
