//! Copy-to-clipboard button with a transient "Copied" state.
//!
//! DESIGN
//! ======
//! One pending reset timer per button, held in a [`PendingReset`]. A repeat
//! copy displaces the stored `Timeout`, and dropping a gloo `Timeout` cancels
//! it, so only the latest copy's timer can revert the label. When it fires it
//! clears the indicator outright. Unmounting disposes the stored timer with
//! the component.
//!
//! [`PendingReset`]: crate::state::copy_feedback::PendingReset

use leptos::prelude::*;

use crate::state::copy_feedback::CopyFeedback;

#[component]
pub fn CopyButton(
    #[prop(into)] value: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let label = label.unwrap_or_else(|| "Copy".to_owned());
    let aria = format!("Copy {value}");

    #[cfg(feature = "hydrate")]
    let on_click = {
        use gloo_timers::callback::Timeout;

        use crate::state::copy_feedback::{COPIED_RESET_MS, PendingReset};
        use crate::util::{clipboard, clock};

        let timer = StoredValue::new_local(PendingReset::<Timeout>::default());
        move |_: leptos::ev::MouseEvent| {
            let value = value.clone();
            leptos::task::spawn_local(async move {
                let outcome = clipboard::write_text(&value).await;
                if let Err(e) = &outcome {
                    leptos::logging::warn!("copy failed: {e}");
                }
                let armed = feedback.try_update(|f| f.record(&outcome, clock::now_ms())).unwrap_or(false);
                if !armed {
                    return;
                }
                let reset = Timeout::new(COPIED_RESET_MS, move || {
                    feedback.try_update(CopyFeedback::reset);
                });
                timer.try_update_value(|slot| drop(slot.arm(reset)));
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_click = {
        let _ = value;
        move |_: leptos::ev::MouseEvent| {}
    };

    view! {
        <button
            class="copy-button"
            class:copy-button--copied=move || feedback.get().is_copied()
            aria-label=aria
            on:click=on_click
        >
            {move || if feedback.get().is_copied() { "Copied".to_owned() } else { label.clone() }}
        </button>
    }
}
