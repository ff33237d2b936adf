//! Interaction services over the rendered page.
//!
//! # Responsibility
//! - Own the mutable page state and reflect it onto card visibility.
//! - Model the deferred viewport scroll explicitly.
//! - Derive the one-shot navigation summaries.
//!
//! # Invariants
//! - One logical thread of control; a pass always runs to completion
//!   before the next interaction is handled.

pub mod filter;
pub mod summary;
pub mod viewport;
