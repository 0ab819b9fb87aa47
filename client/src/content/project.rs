//! Project records and their closed-set presentation keys.

use serde::Deserialize;

/// A portfolio entry. Rendered in dataset order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Deployed site.
    pub url: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub article_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub icon_name: String,
    #[serde(default)]
    pub featured: bool,
    pub status: ProjectStatus,
}

impl Project {
    pub fn icon(&self) -> ProjectIcon {
        ProjectIcon::from_name(&self.icon_name)
    }
}

/// Release status badge. Unknown values are kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectStatus {
    Live,
    Beta,
    Maintenance,
    Concept,
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "live" => Self::Live,
            "beta" => Self::Beta,
            "maintenance" => Self::Maintenance,
            "concept" => Self::Concept,
            _ => Self::Other(raw),
        }
    }
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Live => "Live",
            Self::Beta => "Beta",
            Self::Maintenance => "Maintenance",
            Self::Concept => "Concept",
            Self::Other(raw) => raw,
        }
    }

    /// BEM modifier for the badge; unknown statuses get the neutral style.
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Beta => "beta",
            Self::Maintenance => "maintenance",
            Self::Concept => "concept",
            Self::Other(_) => "neutral",
        }
    }
}

/// Card glyph, keyed by the dataset's `iconName`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectIcon {
    Cpu,
    Eye,
    Terminal,
    Mic,
    Sparkles,
    Palette,
    LineChart,
    Gamepad,
    Wifi,
    Code,
    Music,
    Leaf,
    Shield,
    Activity,
    #[default]
    Box,
}

impl ProjectIcon {
    /// Total over all strings: unrecognized names map to `Box`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Cpu" => Self::Cpu,
            "Eye" => Self::Eye,
            "Terminal" => Self::Terminal,
            "Mic" => Self::Mic,
            "Sparkles" => Self::Sparkles,
            "Palette" => Self::Palette,
            "LineChart" => Self::LineChart,
            "Gamepad2" => Self::Gamepad,
            "Wifi" => Self::Wifi,
            "Code" => Self::Code,
            "Music" => Self::Music,
            "Leaf" => Self::Leaf,
            "Shield" => Self::Shield,
            "Activity" => Self::Activity,
            _ => Self::Box,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Cpu => "🧠",
            Self::Eye => "👁",
            Self::Terminal => "⌨",
            Self::Mic => "🎙",
            Self::Sparkles => "✨",
            Self::Palette => "🎨",
            Self::LineChart => "📈",
            Self::Gamepad => "🎮",
            Self::Wifi => "📶",
            Self::Code => "</>",
            Self::Music => "♪",
            Self::Leaf => "🍃",
            Self::Shield => "🛡",
            Self::Activity => "〰",
            Self::Box => "▢",
        }
    }
}
