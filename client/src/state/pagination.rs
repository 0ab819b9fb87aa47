//! Fixed-size paging over the static project list.
//!
//! DESIGN
//! ======
//! `Pagination` never clamps a page it is asked to slice: out-of-range pages
//! yield an empty slice. Navigation goes through [`Pagination::go_to`] /
//! [`Pagination::handle_page_change`], which clamp to `1..=total_pages`.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::{Range, RangeInclusive};

use crate::state::scroll;
use crate::util::viewport::Viewport;

/// Projects shown per page.
pub const PAGE_SIZE: usize = 6;

/// Element id of the project grid; page changes scroll back to it.
pub const PROJECT_GRID_ANCHOR: &str = "project-grid";

/// Space left above the grid anchor for the page header.
pub const HEADER_CLEARANCE: f64 = 100.0;

/// Number of pages for `item_count` items; never less than one.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Active page (1-indexed) over a fixed item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    item_count: usize,
    page_size: usize,
    current: usize,
}

impl Pagination {
    /// Start on page 1. A zero page size is treated as one.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self { item_count, page_size: page_size.max(1), current: 1 }
    }

    /// Pagination over `item_count` items with [`PAGE_SIZE`].
    pub fn for_items(item_count: usize) -> Self {
        Self::new(item_count, PAGE_SIZE)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.page_size)
    }

    /// Page numbers for the pager buttons.
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Pager controls are only worth showing with more than one page.
    pub fn shows_pager(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Clamp a requested page into `1..=total_pages`.
    pub fn clamp(&self, requested: usize) -> usize {
        requested.clamp(1, self.total_pages())
    }

    /// Item index range shown on `page`; `None` when `page` is out of range.
    pub fn visible_range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.total_pages() {
            return None;
        }
        let start = (page - 1) * self.page_size;
        let end = (page * self.page_size).min(self.item_count);
        Some(start..end)
    }

    /// Items shown on `page`. Out-of-range pages yield an empty slice.
    pub fn visible_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        self.visible_range(page)
            .and_then(|range| items.get(range))
            .unwrap_or(&[])
    }

    /// Items shown on the active page.
    pub fn current_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.visible_slice(items, self.current)
    }

    /// Move to `requested`, clamped. Returns the page now active.
    pub fn go_to(&mut self, requested: usize) -> usize {
        self.current = self.clamp(requested);
        self.current
    }

    /// Move to `requested` (clamped), then smooth-scroll the grid anchor
    /// back under the header. A missing anchor skips the scroll.
    pub fn handle_page_change(&mut self, requested: usize, viewport: &dyn Viewport) -> usize {
        let page = self.go_to(requested);
        scroll::scroll_to_anchor(viewport, PROJECT_GRID_ANCHOR, HEADER_CLEARANCE);
        page
    }
}
