//! Core engine for a single-page curriculum-vitae view.
//! This crate owns the data model, the view-node document, the category
//! filter state machine and the navigation summary derivations.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod page;
pub mod service;
pub mod unlock;
pub mod view;

pub use catalog::Catalog;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{CardRecord, CardValidationError, Category, CategoryParseError};
pub use model::content::{ContentBlock, LinkTarget};
pub use page::{host_document, Page, PageError, MOUNT_ID};
pub use service::filter::{AppState, FilterController, VISIBLE_CLASS};
pub use service::viewport::{ScrollRequest, Viewport, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS};
pub use unlock::{encode_token, is_unlock_token, unlock_from_query, ACCESS_PARAM};
pub use view::dom::{Attr, Child, Document, Element, NodeId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
