#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn document_root_apply_is_noop_but_callable() {
    DocumentRoot.apply(Appearance::Light);
    DocumentRoot.apply(Appearance::Dark);
}

#[test]
fn dark_class_matches_stylesheet_selector() {
    assert_eq!(DARK_CLASS, "dark");
}
