//! Sticky site header with the theme toggle.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::theme::ThemeMode;

/// Glyph shown on the toggle for each mode.
pub fn theme_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::System => "◐",
    }
}

/// Tooltip and accessible name for the toggle, e.g. `Theme: Auto`.
pub fn theme_title(mode: ThemeMode) -> String {
    format!("Theme: {}", mode.label())
}

#[component]
pub fn Header(#[prop(into)] mode: Signal<ThemeMode>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__logo" aria-hidden="true">"AI"</span>
                <span class="site-header__name">"AI悦创 Lab"</span>
            </a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="#project-grid">"Projects"</a>
                <a class="site-header__link" href="#social">"Contact"</a>
                <button
                    class="site-header__theme"
                    data-mode=move || mode.get().as_str()
                    title=move || theme_title(mode.get())
                    aria-label=move || theme_title(mode.get())
                    on:click=move |_| on_toggle.run(())
                >
                    {move || theme_glyph(mode.get())}
                </button>
            </nav>
        </header>
    }
}
