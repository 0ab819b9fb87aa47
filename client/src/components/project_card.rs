//! Card for one portfolio project.
//!
//! Cards fade in with a stagger keyed on their position within the page, so
//! every page change replays the same cascade.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::content::Project;

/// Stagger between consecutive cards.
pub const CARD_STAGGER_MS: usize = 50;

/// Entrance delay for the card at `index` on the current page.
pub fn card_delay_ms(index: usize) -> usize {
    index * CARD_STAGGER_MS
}

pub fn card_style(index: usize) -> String {
    format!("animation-delay: {}ms", card_delay_ms(index))
}

#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let icon = project.icon();
    let badge_class = format!("project-card__status project-card__status--{}", project.status.badge_modifier());
    let status_label = project.status.label().to_owned();
    let thumbnail = project.thumbnail_url.clone();
    let title_alt = project.title.clone();
    let github_url = project.github_url.clone();
    let article_url = project.article_url.clone();
    let tags = project.tags.clone();

    view! {
        <article
            class="project-card"
            class:project-card--featured=project.featured
            style=card_style(index)
            data-project-id=project.id.clone()
        >
            <div class="project-card__media">
                {match thumbnail {
                    Some(src) => view! { <img class="project-card__thumb" src=src alt=title_alt loading="lazy"/> }.into_any(),
                    None => view! { <span class="project-card__icon" aria-hidden="true">{icon.glyph()}</span> }.into_any(),
                }}
                <span class=badge_class>{status_label}</span>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">
                    <a href=project.url.clone() target="_blank" rel="noopener noreferrer">{project.title.clone()}</a>
                </h3>
                <p class="project-card__description">{project.description.clone()}</p>
                <ul class="project-card__tags">
                    {tags.into_iter().map(|tag| view! { <li class="project-card__tag">{tag}</li> }).collect_view()}
                </ul>
            </div>
            <footer class="project-card__links">
                <a class="project-card__link project-card__link--primary" href=project.url.clone() target="_blank" rel="noopener noreferrer">
                    "Visit"
                </a>
                {github_url.map(|href| view! {
                    <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">"Source"</a>
                })}
                {article_url.map(|href| view! {
                    <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">"Article"</a>
                })}
            </footer>
        </article>
    }
}
