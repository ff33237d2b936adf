//! Deferred viewport scrolling.
//!
//! # Responsibility
//! - Record scroll requests emitted by interaction handlers.
//! - Apply them once the host signals that layout has settled.
//!
//! # Invariants
//! - Requests are fire-and-forget: no cancellation, no result, ordered
//!   only after the synchronous handler body that scheduled them.
//! - The carried delay is cosmetic imprecision inherited from the page
//!   (time for the menu collapse to settle), not a timing guarantee.

use crate::view::dom::NodeId;

/// Upward offset applied to every scheduled scroll, clearing the fixed
/// navigation bar.
pub const SCROLL_OFFSET: i64 = -100;

/// Nominal settle delay before the host should measure and apply.
pub const SCROLL_SETTLE_DELAY_MS: u64 = 10;

/// One pending scroll towards the top of a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub offset: i64,
    pub delay_ms: u64,
}

/// Scroll position model for the single page viewport.
#[derive(Debug, Default)]
pub struct Viewport {
    scroll_top: i64,
    pending: Vec<ScrollRequest>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_top(&self) -> i64 {
        self.scroll_top
    }

    pub fn pending(&self) -> &[ScrollRequest] {
        &self.pending
    }

    /// Records one deferred scroll request.
    pub fn schedule_scroll(&mut self, target: NodeId, offset: i64, delay_ms: u64) {
        self.pending.push(ScrollRequest {
            target,
            offset,
            delay_ms,
        });
    }

    /// Applies every pending request in order, measuring each target's top
    /// through the host-supplied callback. The final position is clamped
    /// at the document top.
    pub fn settle_with<F>(&mut self, mut measure_top: F)
    where
        F: FnMut(NodeId) -> i64,
    {
        for request in self.pending.drain(..) {
            let top = measure_top(request.target);
            self.scroll_top = (top + request.offset).max(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Viewport, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS};
    use crate::view::dom::Document;

    #[test]
    fn settle_applies_offset_and_clamps_at_top() {
        let mut doc = Document::new();
        let cards = doc.create_element("div");
        let mut viewport = Viewport::new();

        viewport.schedule_scroll(cards, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS);
        assert_eq!(viewport.pending().len(), 1);
        viewport.settle_with(|_| 540);
        assert_eq!(viewport.scroll_top(), 440);
        assert!(viewport.pending().is_empty());

        viewport.schedule_scroll(cards, SCROLL_OFFSET, SCROLL_SETTLE_DELAY_MS);
        viewport.settle_with(|_| 30);
        assert_eq!(viewport.scroll_top(), 0);
    }
}
