//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wraps one browser capability (storage, media queries, the
//! document root, scrolling, the clipboard, the clock) behind a portable
//! interface so state and page logic stay testable off-browser.

pub mod clipboard;
pub mod clock;
pub mod color_scheme;
pub mod dark_mode;
pub mod storage;
pub mod viewport;
