use super::*;
use crate::util::viewport::RecordingViewport;

// =============================================================
// total_pages
// =============================================================

#[test]
fn total_pages_is_ceiling_with_floor_of_one() {
    for page_size in 1usize..=8 {
        for item_count in 0usize..=50 {
            let expected = item_count.div_ceil(page_size).max(1);
            assert_eq!(total_pages(item_count, page_size), expected, "{item_count} items / {page_size}");
        }
    }
}

#[test]
fn empty_list_still_has_one_page() {
    let pages = Pagination::for_items(0);
    assert_eq!(pages.total_pages(), 1);
    assert!(!pages.shows_pager());
    assert_eq!(pages.current_slice::<u8>(&[]), &[] as &[u8]);
}

#[test]
fn exact_multiple_has_no_trailing_empty_page() {
    let items: Vec<u32> = (1..=12).collect();
    let pages = Pagination::for_items(items.len());
    assert_eq!(pages.total_pages(), 2);
    assert_eq!(pages.visible_slice(&items, 2), &[7, 8, 9, 10, 11, 12]);
    assert!(pages.visible_slice(&items, 3).is_empty());
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let pages = Pagination::new(3, 0);
    assert_eq!(pages.page_size(), 1);
    assert_eq!(pages.total_pages(), 3);
}

// =============================================================
// visible_slice
// =============================================================

#[test]
fn fourteen_projects_page_three_shows_last_two() {
    let items: Vec<u32> = (1..=14).collect();
    let pages = Pagination::for_items(items.len());
    assert_eq!(pages.total_pages(), 3);
    assert_eq!(pages.visible_slice(&items, 1), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(pages.visible_slice(&items, 3), &[13, 14]);
}

#[test]
fn slice_lengths_are_full_except_possibly_the_last() {
    for item_count in 1..=40 {
        let items: Vec<usize> = (0..item_count).collect();
        let pages = Pagination::new(item_count, 6);
        let total = pages.total_pages();
        for page in 1..=total {
            let len = pages.visible_slice(&items, page).len();
            if page < total {
                assert_eq!(len, 6);
            } else {
                assert_eq!(len, item_count - (total - 1) * 6);
            }
        }
    }
}

#[test]
fn out_of_range_pages_are_empty_not_clamped() {
    let items: Vec<u32> = (1..=14).collect();
    let pages = Pagination::for_items(items.len());
    assert!(pages.visible_slice(&items, 0).is_empty());
    assert!(pages.visible_slice(&items, 4).is_empty());
    assert_eq!(pages.visible_range(0), None);
    assert_eq!(pages.visible_range(3), Some(12..14));
}

// =============================================================
// navigation
// =============================================================

#[test]
fn go_to_clamps_requests() {
    let mut pages = Pagination::for_items(14);
    assert_eq!(pages.go_to(0), 1);
    assert_eq!(pages.go_to(99), 3);
    assert_eq!(pages.go_to(2), 2);
    assert!(pages.has_previous());
    assert!(pages.has_next());
}

#[test]
fn previous_and_next_disable_at_the_edges() {
    let mut pages = Pagination::for_items(14);
    assert!(!pages.has_previous());
    pages.go_to(3);
    assert!(!pages.has_next());
    assert_eq!(pages.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn page_change_scrolls_grid_under_header() {
    let viewport = RecordingViewport::with_anchor(PROJECT_GRID_ANCHOR, 640.0);
    let mut pages = Pagination::for_items(14);
    assert_eq!(pages.handle_page_change(2, &viewport), 2);
    assert_eq!(viewport.requests(), vec![540.0]);
    assert_eq!(pages.current(), 2);
}

#[test]
fn page_change_without_anchor_skips_scroll() {
    let viewport = RecordingViewport::default();
    let mut pages = Pagination::for_items(14);
    assert_eq!(pages.handle_page_change(5, &viewport), 3);
    assert!(viewport.requests().is_empty());
}
