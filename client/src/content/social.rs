//! Social directory shown in the contact panel.

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDirectory {
    pub official_site: OfficialSite,
    #[serde(default)]
    pub channels: Vec<QrChannel>,
    #[serde(default)]
    pub links: Vec<OutboundLink>,
    #[serde(default)]
    pub support: Vec<SupportCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialSite {
    pub title: String,
    pub description: String,
    pub url: String,
    pub domain: String,
}

/// A contact channel reached by QR code, with an optional copyable handle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrChannel {
    pub title: String,
    pub value: String,
    pub qr_image_url: String,
    pub accent: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub hide_copy: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundLink {
    pub title: String,
    pub url: String,
    /// Short text badge standing in for a brand icon.
    pub badge: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportCard {
    pub title: String,
    pub caption: String,
    pub qr_image_url: String,
    pub accent: String,
}
