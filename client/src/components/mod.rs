//! Presentation components for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless views over props. Interactive state lives in the
//! page (`pages::home`) and reaches them as signals and callbacks.

pub mod copy_button;
pub mod footer;
pub mod header;
pub mod pager;
pub mod project_card;
pub mod scroll_controls;
pub mod social_profile;
