//! Theme preference model: the tri-state mode and the appearance it resolves to.
//!
//! DESIGN
//! ======
//! `ThemeMode` is what the visitor chose; `Appearance` is what the page shows.
//! Only `System` depends on the host signal, and only explicit modes are ever
//! written to storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Storage slot holding the literal `light` or `dark`. Absent means `system`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visitor's display preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Mirror the host's live color-scheme signal.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Human label for the toggle's tooltip.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "Auto",
        }
    }

    /// Toggle order: light, dark, system, light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Adopt a persisted slot value; absent or invalid falls back to `System`.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// Value to write to the storage slot; `None` means clear it.
    pub fn persisted_value(self) -> Option<&'static str> {
        match self {
            Self::Light | Self::Dark => Some(self.as_str()),
            Self::System => None,
        }
    }

    /// Appearance for this mode given the host's current preference.
    pub fn resolve(self, system_prefers_dark: bool) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::System => Appearance::from_dark(system_prefers_dark),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no theme mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

/// Presentation actually applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
