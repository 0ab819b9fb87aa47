//! Scroll orchestration: floating-control visibility and programmatic
//! smooth scrolling.
//!
//! Visibility is a pure function of the current offset, recomputed on every
//! scroll event. The scroll helpers only issue requests to a [`Viewport`].

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::util::viewport::Viewport;

/// Offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Whether the scroll-to-top control shows at `offset`.
pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Floating-control visibility derived from the last observed offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub show_scroll_top: bool,
}

impl ScrollState {
    /// Recompute from `offset`. Returns `true` when visibility changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let visible = scroll_top_visible(offset);
        let changed = visible != self.show_scroll_top;
        self.show_scroll_top = visible;
        changed
    }
}

pub fn scroll_to_top(viewport: &dyn Viewport) {
    viewport.smooth_scroll_to(0.0);
}

pub fn scroll_to_bottom(viewport: &dyn Viewport) {
    viewport.smooth_scroll_to(viewport.document_height());
}

/// Scroll so the element `id` sits `clearance` below the top edge.
/// Returns `false` (and does nothing) when the element is not mounted.
pub fn scroll_to_anchor(viewport: &dyn Viewport, id: &str, clearance: f64) -> bool {
    let Some(top) = viewport.anchor_top(id) else {
        return false;
    };
    viewport.smooth_scroll_to(top - clearance);
    true
}
