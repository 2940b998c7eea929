//! Read-only document tree
//!
//! Elements are stored in an arena ([`XmlTree`]) and addressed by stable
//! [`NodeId`]s. Each element's qualified name is classified into an
//! [`ElementKind`] once, when it is added, so the converters dispatch on an
//! enum instead of comparing tag strings at every step.
//!
//! # Module Structure
//!
//! - `kind`: qualified names and element classification
//! - `arena`: the arena, node handles and [`TreeBuilder`]
//! - `walk`: pre-order traversal and [`VisitedSet`]
//! - `parse`: construction from XML text

mod arena;
mod kind;
mod parse;
mod walk;


// Re-export public API
pub use arena::{Node, NodeId, TreeBuilder, XmlTree};
pub use kind::{ElementKind, QName};
pub use parse::FRAGMENT_ROOT;
pub use walk::{walk, Descendants, VisitedSet, Walk};
