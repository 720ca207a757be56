//! Category catalog: the static category tree and the cascading selector
//! engine that walks it.

pub mod cascade;
pub mod node;
pub mod tree;

pub use cascade::{derive_option_levels, CategoryCascade, CategorySink, SelectorSlot};
pub use node::{CategoryNode, CategoryOption};
pub use tree::CategoryTree;
