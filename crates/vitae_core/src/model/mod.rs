//! Domain model for the curriculum-vitae page.
//!
//! # Responsibility
//! - Define the canonical card record rendered by the view layer.
//! - Keep one typed content-block shape for every card body.
//!
//! # Invariants
//! - Card records are static configuration, never mutated at runtime.
//! - Every record is identified by a fixed, human-authored document id.

pub mod card;
pub mod content;
