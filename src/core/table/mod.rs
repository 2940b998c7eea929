//! Table flattener
//!
//! Word tables become plain HTML blocks so that Markdown renderers keep the
//! layout:
//!
//! ```text
//! w:tbl -> w:tr -> w:tc -> w:p -> cell text -> CellGrid -> <table>
//! ```
//!
//! Only direct children are followed at each level, so a nested table's
//! cells never leak into the outer grid. Merged cells are not expanded.
//!
//! # Example
//!
//! ```
//! use wordlax::core::document::{ConversionState, W2MOptions};
//! use wordlax::core::table::table_to_html;
//! use wordlax::core::tree::XmlTree;
//!
//! let tree = XmlTree::parse_fragment(
//!     "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
//! )
//! .unwrap();
//! let table = tree.root().children().next().unwrap();
//! let mut state = ConversionState::default();
//! let html = table_to_html(table, &mut state, &W2MOptions::default());
//! assert!(html.contains("<th>a</th>"));
//! ```

mod cell;
mod grid;


// Re-export public API
pub use cell::{cell_text, render_inline};
pub use grid::CellGrid;

use crate::core::document::{ConversionState, W2MOptions};
use crate::core::tree::{ElementKind, Node};
use crate::utils::error::{ConversionWarning, WarningKind};

/// Collect the rendered cells of a `w:tbl` into a padded grid
pub fn table_grid(
    table: Node,
    state: &mut ConversionState,
    options: &W2MOptions,
) -> Option<CellGrid> {
    let rows = table
        .children()
        .filter(|n| n.is(ElementKind::TableRow))
        .map(|tr| {
            tr.children()
                .filter(|n| n.is(ElementKind::TableCell))
                .map(|tc| cell_text(tc, state, options))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    CellGrid::from_rows(rows)
}

/// Flatten a `w:tbl` to an HTML block; empty tables yield an empty string
pub fn table_to_html(table: Node, state: &mut ConversionState, options: &W2MOptions) -> String {
    match table_grid(table, state, options) {
        Some(grid) => {
            log::debug!(
                "table {}x{} (header: {})",
                grid.height(),
                grid.width(),
                grid.has_header()
            );
            grid.to_html()
        }
        None => {
            state.warn(ConversionWarning::new(
                WarningKind::EmptyTable,
                "table has no rows with cells",
            ));
            String::new()
        }
    }
}
