//! Floating scroll-to-top / scroll-to-bottom buttons.

use leptos::prelude::*;

/// The top button renders only while `show_top` holds; the bottom button is
/// always present.
#[component]
pub fn ScrollControls(
    #[prop(into)] show_top: Signal<bool>,
    on_top: Callback<()>,
    on_bottom: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="scroll-controls">
            <Show when=move || show_top.get()>
                <button
                    class="scroll-controls__button scroll-controls__button--top"
                    title="Back to top"
                    aria-label="Back to top"
                    on:click=move |_| on_top.run(())
                >
                    "↑"
                </button>
            </Show>
            <button
                class="scroll-controls__button scroll-controls__button--bottom"
                title="Jump to bottom"
                aria-label="Jump to bottom"
                on:click=move |_| on_bottom.run(())
            >
                "↓"
            </button>
        </div>
    }
}
