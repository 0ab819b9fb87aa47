//! Window scroll position, document geometry and smooth scrolling.

/// Scrollable viewport the page renders into.
pub trait Viewport {
    /// Vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Full scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Document-absolute top of the element with `id`, if it is mounted.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    /// Animate the page to vertical offset `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// The browser window. Off-browser it is a detached, zero-height viewport
/// that ignores scroll requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn document_height(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
                .map_or(0.0, |el| f64::from(el.scroll_height()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        #[cfg(feature = "hydrate")]
        {
            let el = web_sys::window()?.document()?.get_element_by_id(id)?;
            Some(el.get_bounding_client_rect().top() + self.scroll_y())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            None
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = top;
        }
    }
}

/// Scripted viewport that records scroll requests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingViewport {
    pub scroll_y: f64,
    pub document_height: f64,
    pub anchors: std::collections::HashMap<String, f64>,
    pub scrolled_to: std::cell::RefCell<Vec<f64>>,
}

#[cfg(test)]
impl RecordingViewport {
    pub fn with_anchor(id: &str, top: f64) -> Self {
        let mut viewport = Self::default();
        viewport.anchors.insert(id.to_owned(), top);
        viewport
    }

    pub fn requests(&self) -> Vec<f64> {
        self.scrolled_to.borrow().clone()
    }
}

#[cfg(test)]
impl Viewport for RecordingViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.anchors.get(id).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }
}
