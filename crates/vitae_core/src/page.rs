//! Whole-page assembly over a host document.
//!
//! # Responsibility
//! - Enforce the mount contract: one pre-existing `#content` container.
//! - Run the load sequence once: loading indicator, navigation bar, cards,
//!   initial visibility pass, summary derivation.
//!
//! # Invariants
//! - A missing mount aborts with a diagnostic; the page never renders
//!   partially.
//! - The unlock flag is evaluated exactly once, before any node exists.

use crate::catalog::Catalog;
use crate::model::card::{CardValidationError, Category};
use crate::service::filter::FilterController;
use crate::service::summary;
use crate::unlock::unlock_from_query;
use crate::view::builder;
use crate::view::dom::{Document, NodeId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed id of the host container the page is inserted into.
pub const MOUNT_ID: &str = "content";

/// Assembly error. Nothing here is recoverable at runtime; both variants
/// point at a broken host document or broken static configuration.
#[derive(Debug)]
pub enum PageError {
    MissingMount { id: String },
    InvalidCard(CardValidationError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMount { id } => {
                write!(f, "mount element `#{id}` not found in host document")
            }
            Self::InvalidCard(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingMount { .. } => None,
            Self::InvalidCard(err) => Some(err),
        }
    }
}

impl From<CardValidationError> for PageError {
    fn from(value: CardValidationError) -> Self {
        Self::InvalidCard(value)
    }
}

/// The assembled page: node handles plus the interaction controller.
#[derive(Debug)]
pub struct Page {
    mount: NodeId,
    loading: NodeId,
    navbar: NodeId,
    cards_container: NodeId,
    controller: FilterController,
}

impl Page {
    /// Builds the whole page into the host document, in insertion order:
    /// loading indicator (beside the mount), navigation bar, cards.
    ///
    /// `query` is the raw page query string, read once for the unlock
    /// check.
    ///
    /// # Errors
    /// - [`PageError::MissingMount`] when `#content` does not exist.
    /// - [`PageError::InvalidCard`] when a catalog record fails
    ///   validation; assembly stops before any node is inserted.
    pub fn mount(doc: &mut Document, catalog: &Catalog, query: &str) -> Result<Self, PageError> {
        let mount = doc
            .get_element_by_id(MOUNT_ID)
            .ok_or_else(|| PageError::MissingMount {
                id: MOUNT_ID.to_string(),
            })?;
        for record in catalog.iter() {
            record.validate()?;
        }

        let unlocked = unlock_from_query(query);

        let shell = doc.parent(mount).unwrap_or_else(|| doc.root());
        let loading = builder::build_loading_indicator(doc, shell);
        doc.toggle_class(loading, "load");

        let navbar = builder::build_navigation_bar(doc, mount, unlocked);
        let cards_container = builder::build_all_cards(doc, mount, catalog, unlocked);

        let controller = FilterController::initialize(doc, unlocked);
        summary::annotate_navigation(doc);

        doc.toggle_class(loading, "load");

        info!(
            "event=page_mount module=page status=ok cards={} unlocked={} active={}",
            controller.cards().len(),
            unlocked,
            controller.active_category()
        );
        Ok(Self {
            mount,
            loading,
            navbar,
            cards_container,
            controller,
        })
    }

    pub fn mount_node(&self) -> NodeId {
        self.mount
    }

    pub fn loading(&self) -> NodeId {
        self.loading
    }

    pub fn navbar(&self) -> NodeId {
        self.navbar
    }

    pub fn cards_container(&self) -> NodeId {
        self.cards_container
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FilterController {
        &mut self.controller
    }

    /// Simulates a click on the navigation entry of `category`.
    ///
    /// Returns `false` when the category has no rendered entry (the locked
    /// identity section).
    pub fn click(&mut self, doc: &mut Document, category: Category) -> bool {
        match self.controller.navigation_entry(doc, category) {
            Some(entry) => self.controller.on_navigation_click(doc, entry).is_ok(),
            None => false,
        }
    }
}

/// Builds a minimal host document holding only the `#content` mount.
///
/// Hosts embedding the page elsewhere construct their own shell; this is
/// the default used by the CLI and the tests.
pub fn host_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let mount = doc.create_element("div");
    doc.set_attribute(mount, "id", MOUNT_ID);
    doc.append_node(root, mount);
    doc
}
