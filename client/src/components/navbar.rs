//! Fixed top navigation with section anchors and a mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `NavState`. The scroll listener only flips the
//! `scrolled` flag when the threshold is actually crossed, and only moves the
//! highlighted link when a different section comes under the bar, so
//! scrolling does not re-render the bar on every frame.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::state::ui::{NavState, Section};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let offset = window.scroll_y().unwrap_or(0.0);
            let tops = section_tops(&window, offset);

            let mut next = nav.get_untracked();
            let scrolled_changed = next.observe_scroll(offset);
            let active_changed = next.observe_sections(offset + crate::state::ui::SPY_OFFSET_PX, &tops);
            if scrolled_changed || active_changed {
                nav.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let bar_class = move || {
        if nav.with(|n| n.scrolled) { "navbar navbar--scrolled" } else { "navbar" }
    };
    let menu_icon = move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" };

    view! {
        <nav class=bar_class>
            <div class="navbar__inner">
                <a href=Section::About.href() class="navbar__brand" on:click=move |_| nav.update(|n| n.select(Section::About))>
                    {PROFILE.name}
                </a>
                <div class="navbar__links">
                    <SectionLinks/>
                </div>
                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {menu_icon}
                </button>
            </div>
            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="navbar__mobile-menu">
                    <SectionLinks/>
                </div>
            </Show>
        </nav>
    }
}

/// One anchor per section; clicking marks it active and closes the mobile menu.
#[component]
fn SectionLinks() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    Section::ALL
        .into_iter()
        .map(|section| {
            let link_class = move || {
                if nav.with(|n| n.active == section) {
                    "navbar__link navbar__link--active"
                } else {
                    "navbar__link"
                }
            };
            view! {
                <a href=section.href() class=link_class on:click=move |_| nav.update(|n| n.select(section))>
                    {section.title()}
                </a>
            }
        })
        .collect_view()
}

/// Document offset of each rendered section, in page order.
#[cfg(feature = "hydrate")]
fn section_tops(window: &web_sys::Window, scroll_y: f64) -> Vec<(Section, f64)> {
    let Some(document) = window.document() else {
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document.get_element_by_id(section.id())?;
            Some((section, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}
