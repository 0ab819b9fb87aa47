//! Applying the resolved appearance to the document root.
//!
//! Sets the `dark` class and a `data-theme` attribute on `<html>` so both
//! class-based and attribute-based selectors in the stylesheet pick it up.
//! Requires a browser environment; off-browser application is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Appearance;

/// Class toggled on the root element while the dark appearance is active.
pub const DARK_CLASS: &str = "dark";

/// Something that can present the light or dark appearance.
pub trait ThemeSurface {
    fn apply(&self, appearance: Appearance);
}

/// The `<html>` element of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, appearance: Appearance) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            let _ = el.class_list().toggle_with_force(DARK_CLASS, appearance.is_dark());
            let _ = el.set_attribute("data-theme", appearance.as_str());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = appearance;
        }
    }
}
