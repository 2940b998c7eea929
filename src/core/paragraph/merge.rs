//! Superscript / subscript folding
//!
//! Word stores `x²` as a plain run `x` followed by a run flagged as
//! superscript. This pass rebuilds such sequences into one math item.

use super::ContentItem;

/// Fold script items into the text item that precedes them
///
/// A `Text` followed by one or more scripts becomes `Math("base_{sub}^{sup}")`
/// with all subscript and all superscript texts accumulated separately.
/// Scripts with no preceding text become `Math("^{..}")` / `Math("_{..}")`.
/// Everything else keeps its position.
pub fn merge_scripts(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut merged = Vec::with_capacity(items.len());
    let mut iter = items.into_iter().peekable();

    while let Some(item) = iter.next() {
        match item {
            ContentItem::Text(base) => {
                let mut sup = String::new();
                let mut sub = String::new();
                while let Some(next) = iter.peek() {
                    match next {
                        ContentItem::Superscript(s) => sup.push_str(s),
                        ContentItem::Subscript(s) => sub.push_str(s),
                        _ => break,
                    }
                    iter.next();
                }

                let item = match (sub.is_empty(), sup.is_empty()) {
                    (true, true) => ContentItem::Text(base),
                    (false, false) => ContentItem::Math(format!("{}_{{{}}}^{{{}}}", base, sub, sup)),
                    (false, true) => ContentItem::Math(format!("{}_{{{}}}", base, sub)),
                    (true, false) => ContentItem::Math(format!("{}^{{{}}}", base, sup)),
                };
                merged.push(item);
            }
            ContentItem::Superscript(s) => merged.push(ContentItem::Math(format!("^{{{}}}", s))),
            ContentItem::Subscript(s) => merged.push(ContentItem::Math(format!("_{{{}}}", s))),
            other => merged.push(other),
        }
    }

    merged
}
