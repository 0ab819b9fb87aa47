//! Operating-system color-scheme signal and its change subscription.
//!
//! DESIGN
//! ======
//! Listeners are registered through [`ColorSchemeSource::subscribe`] and
//! owned by the returned [`Subscription`]. Dropping the handle unregisters
//! the listener, so a handler can never fire after its owner is gone.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use std::fmt;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Media query matched when the host prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Disposal handle for a registered listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action. It runs once, on [`Self::release`] or drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Release the listener now.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Live dark/light preference of the host environment.
pub trait ColorSchemeSource {
    /// Current preference; `true` means dark.
    fn prefers_dark(&self) -> bool;

    /// Register `on_change` for preference changes until the handle drops.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription;
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
///
/// Off-browser it reports light and hands out detached subscriptions.
#[derive(Debug, Clone, Default)]
pub struct MediaQueryScheme {
    #[cfg(feature = "hydrate")]
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQueryScheme {
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
            Self { query }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.query.as_ref().map_or(false, web_sys::MediaQueryList::matches)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::closure::Closure;

            let Some(query) = self.query.clone() else {
                return Subscription::detached();
            };
            let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
            );
            if let Err(e) = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                leptos::logging::warn!("color-scheme listener not registered: {e:?}");
                return Subscription::detached();
            }
            Subscription::new(move || {
                let _ = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
                drop(listener);
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Subscription::detached()
        }
    }
}
