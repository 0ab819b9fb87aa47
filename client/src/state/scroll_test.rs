use super::*;
use crate::util::viewport::RecordingViewport;

#[test]
fn control_shows_only_past_threshold() {
    assert!(!scroll_top_visible(0.0));
    assert!(!scroll_top_visible(SCROLL_TOP_THRESHOLD));
    assert!(scroll_top_visible(SCROLL_TOP_THRESHOLD + 1.0));
}

#[test]
fn observe_toggles_when_crossing_threshold() {
    let mut state = ScrollState::default();
    assert!(!state.show_scroll_top);

    assert!(state.observe(450.0));
    assert!(state.show_scroll_top);

    assert!(!state.observe(900.0), "still past threshold, no change");
    assert!(state.show_scroll_top);

    assert!(state.observe(120.0));
    assert!(!state.show_scroll_top);
}

#[test]
fn observe_is_order_independent() {
    let offsets = [10.0, 800.0, 401.0, 399.0, 1200.0, 0.0];
    for &last in &offsets {
        let mut state = ScrollState::default();
        for &offset in &offsets {
            state.observe(offset);
        }
        state.observe(last);
        assert_eq!(state.show_scroll_top, scroll_top_visible(last));
    }
}

#[test]
fn scroll_to_top_targets_zero() {
    let viewport = RecordingViewport { scroll_y: 1500.0, ..RecordingViewport::default() };
    scroll_to_top(&viewport);
    assert_eq!(viewport.requests(), vec![0.0]);
}

#[test]
fn scroll_to_bottom_targets_document_height() {
    let viewport = RecordingViewport { document_height: 4200.0, ..RecordingViewport::default() };
    scroll_to_bottom(&viewport);
    assert_eq!(viewport.requests(), vec![4200.0]);
}

#[test]
fn scroll_to_anchor_offsets_by_clearance() {
    let viewport = RecordingViewport::with_anchor("project-grid", 720.0);
    assert!(scroll_to_anchor(&viewport, "project-grid", 100.0));
    assert_eq!(viewport.requests(), vec![620.0]);
}

#[test]
fn missing_anchor_is_skipped_silently() {
    let viewport = RecordingViewport::default();
    assert!(!scroll_to_anchor(&viewport, "project-grid", 100.0));
    assert!(viewport.requests().is_empty());
}
