//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for document conversion:
//! - OOXML namespaces and attribute fallback rules
//! - Math symbol and operator mappings

pub mod constants;
pub mod symbols;

// Re-export commonly used items
pub use constants::{
    find_by_rules, AttrMatch, DEFAULT_IMAGE_NAME, IMAGE_TITLE_ATTRS, NS_A, NS_M, NS_O, NS_PIC,
    NS_R, NS_V, NS_W, NS_WP, RELATIONSHIP_ID_ATTRS,
};
pub use symbols::{
    classify_accent, nary_operator, substitute_math_symbols, AccentClass, MATH_SYMBOLS,
    NARY_OPERATORS,
};
