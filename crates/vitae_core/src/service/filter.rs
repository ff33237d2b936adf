//! Category filter state and visibility passes.
//!
//! # Responsibility
//! - Own the page state: active category and the unlock flag.
//! - Reflect the active category onto card visibility markers.
//! - Handle navigation clicks: state transition, menu reset, scroll
//!   scheduling.
//!
//! # Invariants
//! - Visible cards are exactly the rendered cards whose classes carry the
//!   active category tag.
//! - A visibility pass is idempotent; no node is destroyed or re-created.
//! - `unlocked` is decided once at assembly and never changes afterwards.

use crate::model::card::{Category, CategoryParseError};
use crate::service::viewport::{Viewport, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS};
use crate::view::builder::{CARDS_ID, MENU_TOGGLE_ID, NAV_LIST_ID};
use crate::view::dom::{Document, NodeId};
use log::debug;

/// Marker class carried by cards of the active category.
pub const VISIBLE_CLASS: &str = "visible";

/// Whole mutable state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub active_category: Category,
    pub unlocked: bool,
}

impl AppState {
    /// Landing state: identity when unlocked, professional otherwise.
    pub fn initial(unlocked: bool) -> Self {
        let active_category = if unlocked {
            Category::Identity
        } else {
            Category::Professional
        };
        Self {
            active_category,
            unlocked,
        }
    }
}

/// Controller owning [`AppState`] and the non-owning card references it
/// revisits on every pass.
#[derive(Debug)]
pub struct FilterController {
    state: AppState,
    nav_entries: Vec<NodeId>,
    cards: Vec<NodeId>,
    menu_toggle: Option<NodeId>,
    cards_container: Option<NodeId>,
    viewport: Viewport,
}

impl FilterController {
    /// Registers navigation entries and card nodes from the rendered tree
    /// and runs the initial visibility pass.
    pub fn initialize(doc: &mut Document, unlocked: bool) -> Self {
        let nav_entries = doc
            .get_element_by_id(NAV_LIST_ID)
            .map(|list| doc.child_elements(list))
            .unwrap_or_default();
        let cards = doc
            .descendants(doc.root())
            .into_iter()
            .filter(|id| doc.has_class(*id, "card"))
            .collect();

        let controller = Self {
            state: AppState::initial(unlocked),
            nav_entries,
            cards,
            menu_toggle: doc.get_element_by_id(MENU_TOGGLE_ID),
            cards_container: doc.get_element_by_id(CARDS_ID),
            viewport: Viewport::new(),
        };
        controller.apply_visibility(doc);
        controller
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn active_category(&self) -> Category {
        self.state.active_category
    }

    pub fn nav_entries(&self) -> &[NodeId] {
        &self.nav_entries
    }

    pub fn cards(&self) -> &[NodeId] {
        &self.cards
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Navigation entry carrying the given category tag, when rendered.
    pub fn navigation_entry(&self, doc: &Document, category: Category) -> Option<NodeId> {
        self.nav_entries
            .iter()
            .copied()
            .find(|entry| doc.data(*entry, "class") == Some(category.as_str()))
    }

    /// Handles one click on a navigation entry: stores the entry's
    /// category, closes the menu toggle, re-runs the visibility pass and
    /// schedules exactly one deferred scroll to the cards container.
    ///
    /// # Errors
    /// - When the entry carries no parseable category tag.
    pub fn on_navigation_click(
        &mut self,
        doc: &mut Document,
        entry: NodeId,
    ) -> Result<Category, CategoryParseError> {
        let tag = doc.data(entry, "class").unwrap_or_default();
        let category: Category = tag.parse()?;

        let previous = self.state.active_category;
        self.state.active_category = category;

        if let Some(toggle) = self.menu_toggle {
            doc.set_checked(toggle, false);
        }
        self.apply_visibility(doc);
        if let Some(container) = self.cards_container {
            self.viewport
                .schedule_scroll(container, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS);
        }

        debug!(
            "event=filter_transition module=filter status=ok from={previous} to={category}"
        );
        Ok(category)
    }

    /// Adds the visible marker to cards of the active category, removes it
    /// everywhere else. Pure toggle, idempotent.
    pub fn apply_visibility(&self, doc: &mut Document) {
        let tag = self.state.active_category.as_str();
        for card in &self.cards {
            if doc.has_class(*card, tag) {
                doc.add_class(*card, VISIBLE_CLASS);
            } else {
                doc.remove_class(*card, VISIBLE_CLASS);
            }
        }
    }
}
