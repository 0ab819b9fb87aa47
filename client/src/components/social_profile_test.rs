use super::*;

#[test]
fn accent_style_sets_css_variable() {
    assert_eq!(accent_style("#FF2442"), "--accent: #FF2442");
}

#[test]
fn bundled_channels_carry_accents() {
    for channel in &social_directory().channels {
        assert!(channel.accent.starts_with('#'), "{}", channel.title);
    }
}
