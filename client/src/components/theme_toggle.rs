//! Floating light/dark switch.

use leptos::prelude::*;

use crate::app::ThemeSignal;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeSignal>();

    let on_toggle = move |_| {
        theme.update(|controller| {
            let (_mode, stored) = controller.toggle();
            #[cfg(feature = "hydrate")]
            {
                if let Err(e) = stored {
                    log::warn!("theme preference not saved: {e}");
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = stored;
        });
    };

    let is_dark = move || theme.with(|t| t.mode().is_dark());

    view! {
        <button
            class="theme-toggle"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            aria-label="Toggle theme"
            on:click=on_toggle
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
