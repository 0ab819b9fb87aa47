//! Theme controller: owns the active mode and keeps the storage slot, the
//! document and the host color-scheme subscription in step with it.
//!
//! DESIGN
//! ======
//! Every mode change commits in one fixed order: in-memory mode, storage
//! slot, document appearance, then the system subscription. A read after any
//! commit sees a consistent (mode, persisted value, applied appearance).
//!
//! The host subscription exists only while the mode is `System`. Leaving
//! `System` or dropping the controller drops the [`Subscription`], which
//! unregisters the listener.

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::state::theme::{Appearance, THEME_STORAGE_KEY, ThemeMode};
use crate::util::color_scheme::{ColorSchemeSource, MediaQueryScheme, Subscription};
use crate::util::dark_mode::{DocumentRoot, ThemeSurface};
use crate::util::storage::{self, PreferenceStore};

pub struct ThemeController {
    mode: ThemeMode,
    store: Rc<dyn PreferenceStore>,
    scheme: Rc<dyn ColorSchemeSource>,
    surface: Rc<dyn ThemeSurface>,
    applied: Rc<Cell<Option<Appearance>>>,
    system_watch: Option<Subscription>,
}

impl ThemeController {
    /// Build a controller in `System` mode. Nothing is read or applied until
    /// [`Self::initialize`] and [`Self::activate`].
    pub fn new(
        store: Rc<dyn PreferenceStore>,
        scheme: Rc<dyn ColorSchemeSource>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self {
            mode: ThemeMode::System,
            store,
            scheme,
            surface,
            applied: Rc::new(Cell::new(None)),
            system_watch: None,
        }
    }

    /// Controller wired to `localStorage`, `matchMedia` and `<html>`.
    pub fn for_browser() -> Self {
        Self::new(
            storage::open_preferences(),
            Rc::new(MediaQueryScheme::new()),
            Rc::new(DocumentRoot),
        )
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Appearance most recently pushed to the surface.
    pub fn applied(&self) -> Option<Appearance> {
        self.applied.get()
    }

    pub fn is_watching_system(&self) -> bool {
        self.system_watch.is_some()
    }

    /// Read the persisted mode. Storage failures read as `System`.
    pub fn load(&self) -> ThemeMode {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(raw) => ThemeMode::from_persisted(raw.as_deref()),
            Err(e) => {
                leptos::logging::warn!("theme preference not read: {e}");
                ThemeMode::System
            }
        }
    }

    /// Adopt the persisted mode into memory. No other side effect.
    pub fn initialize(&mut self) -> ThemeMode {
        self.mode = self.load();
        self.mode
    }

    /// Push the appearance for `mode` to the surface, consulting the host
    /// signal only for `System`.
    pub fn apply_theme(&self, mode: ThemeMode) -> Appearance {
        let appearance = match mode {
            ThemeMode::System => Appearance::from_dark(self.scheme.prefers_dark()),
            explicit => explicit.resolve(false),
        };
        self.surface.apply(appearance);
        self.applied.set(Some(appearance));
        appearance
    }

    /// Write an explicit mode to the slot, or clear it for `System`.
    /// Failures are logged and otherwise ignored.
    pub fn persist(&self, mode: ThemeMode) {
        let result = match mode.persisted_value() {
            Some(value) => self.store.set(THEME_STORAGE_KEY, value),
            None => self.store.remove(THEME_STORAGE_KEY),
        };
        if let Err(e) = result {
            leptos::logging::warn!("theme preference not persisted: {e}");
        }
    }

    /// Commit `mode`: memory, storage, surface, subscription.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Appearance {
        self.mode = mode;
        self.persist(mode);
        let appearance = self.apply_theme(mode);
        self.sync_system_watch();
        appearance
    }

    /// Commit the current mode, e.g. right after [`Self::initialize`].
    pub fn activate(&mut self) -> Appearance {
        self.set_mode(self.mode)
    }

    /// Advance light, dark, system, light and commit the result.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.next();
        self.set_mode(next);
        next
    }

    fn sync_system_watch(&mut self) {
        if self.mode != ThemeMode::System {
            self.system_watch = None;
            return;
        }
        if self.system_watch.is_some() {
            return;
        }
        let surface = Rc::clone(&self.surface);
        let applied = Rc::clone(&self.applied);
        self.system_watch = Some(self.scheme.subscribe(Box::new(move |dark| {
            let appearance = Appearance::from_dark(dark);
            surface.apply(appearance);
            applied.set(Some(appearance));
        })));
    }
}
