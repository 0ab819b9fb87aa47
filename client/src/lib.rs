//! # client
//!
//! Leptos UI for the portfolio site: a paginated project grid, a social
//! contact panel, a three-way theme toggle and floating scroll controls.
//!
//! `state` holds the interaction logic as plain Rust, `util` wraps browser
//! capabilities behind small traits, `content` carries the bundled data, and
//! `components`/`pages` render it. Browser calls only exist under the
//! `hydrate` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
