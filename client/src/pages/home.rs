//! Portfolio landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Owns the three pieces of interactive state (theme mode,
//! current project page, floating-control visibility) and wires them to the
//! browser: the theme controller is created after hydration, and a window
//! scroll listener is registered for the lifetime of the page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::pager::Pager;
use crate::components::project_card::ProjectCard;
use crate::components::scroll_controls::ScrollControls;
use crate::components::social_profile::SocialProfile;
use crate::content::{Project, projects};
use crate::state::pagination::{PROJECT_GRID_ANCHOR, Pagination};
use crate::state::scroll::{self, ScrollState};
use crate::state::theme::ThemeMode;
use crate::util::viewport::WindowViewport;

/// Projects on the active page, paired with their position on that page.
pub fn visible_projects(pagination: &Pagination, all: &[Project]) -> Vec<(usize, Project)> {
    pagination.current_slice(all).iter().cloned().enumerate().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let mode = RwSignal::new(ThemeMode::System);
    let pagination = RwSignal::new(Pagination::for_items(projects().len()));
    let scroll_state = RwSignal::new(ScrollState::default());

    let theme_toggle = theme_toggle(mode);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::Viewport as _;

        let observe = move || {
            let mut next = scroll_state.get_untracked();
            if next.observe(WindowViewport.scroll_y()) {
                scroll_state.set(next);
            }
        };
        Effect::new(observe);
        let handle = window_event_listener(leptos::ev::scroll, move |_| observe());
        on_cleanup(move || handle.remove());
    }

    let on_page_change = Callback::new(move |requested: usize| {
        pagination.update(|p| {
            p.handle_page_change(requested, &WindowViewport);
        });
    });
    let on_top = Callback::new(move |()| scroll::scroll_to_top(&WindowViewport));
    let on_bottom = Callback::new(move |()| scroll::scroll_to_bottom(&WindowViewport));

    view! {
        <div class="site">
            <Header mode=mode on_toggle=theme_toggle/>
            <main class="site__main">
                <section class="hero">
                    <h1 class="hero__title">"Small AI tools, built in the open"</h1>
                    <p class="hero__lead">
                        "Experiments in teaching, creativity and everyday productivity. Each one is live and free to try."
                    </p>
                </section>
                <section id=PROJECT_GRID_ANCHOR class="project-grid" aria-label="Projects">
                    <Show
                        when=move || !projects().is_empty()
                        fallback=|| view! { <p class="project-grid__empty">"No projects yet."</p> }
                    >
                        {move || {
                            visible_projects(&pagination.get(), projects())
                                .into_iter()
                                .map(|(index, project)| view! { <ProjectCard project index/> })
                                .collect_view()
                        }}
                    </Show>
                </section>
                <Pager pagination=pagination on_change=on_page_change/>
                <SocialProfile/>
            </main>
            <Footer/>
            <ScrollControls
                show_top=Signal::derive(move || scroll_state.get().show_scroll_top)
                on_top
                on_bottom
            />
        </div>
    }
}

/// Toggle handler for the header button.
///
/// In the browser a [`ThemeController`](crate::state::theme_controller::ThemeController)
/// is created once the page mounts: it adopts the stored mode, applies it and
/// publishes it to `mode`. Each toggle then commits through the controller.
/// Without a browser the handler only cycles the signal.
fn theme_toggle(mode: RwSignal<ThemeMode>) -> Callback<()> {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::theme_controller::ThemeController;

        let controller = StoredValue::new_local(None::<ThemeController>);
        Effect::new(move || {
            let adopted = controller.try_update_value(|slot| {
                let mut ctl = ThemeController::for_browser();
                ctl.initialize();
                ctl.activate();
                let adopted = ctl.mode();
                *slot = Some(ctl);
                adopted
            });
            if let Some(adopted) = adopted {
                leptos::logging::log!("theme mode: {adopted}");
                mode.set(adopted);
            }
        });
        Callback::new(move |()| {
            let next = controller
                .try_update_value(|slot| slot.as_mut().map(ThemeController::toggle))
                .flatten();
            if let Some(next) = next {
                mode.set(next);
            }
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Callback::new(move |()| mode.update(|m| *m = m.next()))
    }
}
