//! Client-side view state.
//!
//! DESIGN
//! ======
//! Plain data types (`Pagination`, `ScrollState`, `CopyFeedback`, `ThemeMode`)
//! live in reactive signals owned by the home page. `ThemeController` is the
//! one stateful owner of browser handles and stays outside the signal graph.

pub mod copy_feedback;
pub mod pagination;
pub mod scroll;
pub mod theme;
pub mod theme_controller;
