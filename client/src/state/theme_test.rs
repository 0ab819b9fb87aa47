use super::*;

// =============================================================
// ThemeMode parsing
// =============================================================

#[test]
fn theme_mode_default_is_system() {
    assert_eq!(ThemeMode::default(), ThemeMode::System);
}

#[test]
fn theme_mode_parses_its_own_names() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn theme_mode_rejects_unknown_and_differently_cased_names() {
    assert_eq!("Dark".parse::<ThemeMode>(), Err(ParseThemeModeError("Dark".to_owned())));
    assert!("".parse::<ThemeMode>().is_err());
    assert!("sepia".parse::<ThemeMode>().is_err());
}

// =============================================================
// Toggle cycle
// =============================================================

#[test]
fn toggle_cycles_light_dark_system() {
    assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.next(), ThemeMode::System);
    assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
}

#[test]
fn toggle_has_period_three() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.next().next().next(), mode);
        assert_ne!(mode.next(), mode);
    }
}

#[test]
fn toggle_from_corrupt_slot_lands_on_light() {
    for raw in ["garbage", "", "Dark"] {
        assert_eq!(ThemeMode::from_persisted(Some(raw)).next(), ThemeMode::Light, "{raw:?}");
    }
}

// =============================================================
// Persistence mapping
// =============================================================

#[test]
fn only_explicit_modes_are_persisted() {
    assert_eq!(ThemeMode::Light.persisted_value(), Some("light"));
    assert_eq!(ThemeMode::Dark.persisted_value(), Some("dark"));
    assert_eq!(ThemeMode::System.persisted_value(), None);
}

#[test]
fn persisted_value_round_trips_through_from_persisted() {
    for mode in ThemeMode::ALL {
        assert_eq!(ThemeMode::from_persisted(mode.persisted_value()), mode);
    }
}

#[test]
fn from_persisted_falls_back_to_system() {
    assert_eq!(ThemeMode::from_persisted(None), ThemeMode::System);
    assert_eq!(ThemeMode::from_persisted(Some("true")), ThemeMode::System);
    assert_eq!(ThemeMode::from_persisted(Some("system")), ThemeMode::System);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn explicit_modes_ignore_host_signal() {
    assert_eq!(ThemeMode::Light.resolve(true), Appearance::Light);
    assert_eq!(ThemeMode::Dark.resolve(false), Appearance::Dark);
}

#[test]
fn system_mode_mirrors_host_signal() {
    assert_eq!(ThemeMode::System.resolve(true), Appearance::Dark);
    assert_eq!(ThemeMode::System.resolve(false), Appearance::Light);
}

#[test]
fn appearance_helpers_agree() {
    assert!(Appearance::from_dark(true).is_dark());
    assert!(!Appearance::from_dark(false).is_dark());
    assert_eq!(Appearance::Dark.as_str(), "dark");
    assert_eq!(Appearance::default(), Appearance::Light);
}
