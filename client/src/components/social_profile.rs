//! Contact panel: official site, QR channels, outbound links and support
//! cards, laid out as a bento grid.

#[cfg(test)]
#[path = "social_profile_test.rs"]
mod social_profile_test;

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::content::social::{OutboundLink, QrChannel, SupportCard};
use crate::content::social_directory;

/// Inline style exposing a tile's brand color to CSS.
pub fn accent_style(accent: &str) -> String {
    format!("--accent: {accent}")
}

#[component]
pub fn SocialProfile() -> impl IntoView {
    let directory = social_directory();
    let site = &directory.official_site;

    view! {
        <section id="social" class="social">
            <a class="social__site" href=site.url.clone() target="_blank" rel="noopener noreferrer">
                <h2 class="social__site-title">{site.title.clone()}</h2>
                <p class="social__site-description">{site.description.clone()}</p>
                <span class="social__site-domain">{site.domain.clone()}</span>
            </a>
            <div class="social__channels">
                {directory.channels.iter().cloned().map(|channel| view! { <ChannelTile channel/> }).collect_view()}
            </div>
            <ul class="social__links">
                {directory.links.iter().cloned().map(|link| view! { <LinkTile link/> }).collect_view()}
            </ul>
            <div class="social__support">
                {directory.support.iter().cloned().map(|card| view! { <SupportTile card/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ChannelTile(channel: QrChannel) -> impl IntoView {
    let QrChannel { title, value, qr_image_url, accent, link_url, hide_copy } = channel;
    let alt = format!("{title} QR code");

    view! {
        <div class="social-tile social-tile--channel" style=accent_style(&accent)>
            <img class="social-tile__qr" src=qr_image_url alt=alt loading="lazy"/>
            <h3 class="social-tile__title">{title}</h3>
            <span class="social-tile__value">{value.clone()}</span>
            <div class="social-tile__actions">
                {(!hide_copy).then(|| view! { <CopyButton value=value.clone()/> })}
                {link_url.map(|href| view! {
                    <a class="social-tile__open" href=href target="_blank" rel="noopener noreferrer">"Open"</a>
                })}
            </div>
        </div>
    }
}

#[component]
fn LinkTile(link: OutboundLink) -> impl IntoView {
    view! {
        <li class="social-link" style=accent_style(&link.accent)>
            <a class="social-link__anchor" href=link.url target="_blank" rel="noopener noreferrer">
                <span class="social-link__badge" aria-hidden="true">{link.badge}</span>
                <span class="social-link__title">{link.title}</span>
            </a>
        </li>
    }
}

#[component]
fn SupportTile(card: SupportCard) -> impl IntoView {
    let alt = format!("{} QR code", card.title);
    view! {
        <figure class="social-tile social-tile--support" style=accent_style(&card.accent)>
            <img class="social-tile__qr" src=card.qr_image_url alt=alt loading="lazy"/>
            <figcaption>
                <strong class="social-tile__title">{card.title}</strong>
                <span class="social-tile__caption">{card.caption}</span>
            </figcaption>
        </figure>
    }
}
