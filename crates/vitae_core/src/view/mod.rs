//! View layer: the view-node document and its builders.
//!
//! # Responsibility
//! - Own every constructed view node in one arena document.
//! - Map static card data to the node tree declaratively.
//! - Serialize any subtree to escaped HTML text.
//!
//! # Invariants
//! - Nodes are addressed by copyable handles; the document owns the tree.
//! - Builders never mutate their data inputs.

pub mod builder;
pub mod dom;
pub mod html;
