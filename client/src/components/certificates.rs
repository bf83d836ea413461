//! Certificate gallery: first few cards, "View More", and a preview modal.

#[cfg(test)]
#[path = "certificates_test.rs"]
mod certificates_test;

use leptos::prelude::*;

use crate::content::{CERTIFICATES, CERTIFICATES_INITIAL, Certificate};
use crate::state::ui::Section;
use crate::util::pagination::{has_more, toggle_label, visible_items};

#[component]
pub fn Certificates() -> impl IntoView {
    let expanded = RwSignal::new(false);
    let preview = RwSignal::new(None::<usize>);

    let on_close = Callback::new(move |()| preview.set(None));

    let cards = move || {
        visible_items(CERTIFICATES, expanded.get(), CERTIFICATES_INITIAL)
            .iter()
            .enumerate()
            .map(|(index, cert)| {
                let on_open = Callback::new(move |()| preview.set(Some(index)));
                view! { <CertificateCard certificate=*cert on_open=on_open/> }
            })
            .collect_view()
    };

    view! {
        <section id=Section::Certificates.id() class="section certificates">
            <h2 class="section__title">"Certificates"</h2>
            <div class="certificates__grid">{cards}</div>
            {has_more(CERTIFICATES, CERTIFICATES_INITIAL)
                .then(|| {
                    view! {
                        <button class="button certificates__more" on:click=move |_| expanded.update(|e| *e = !*e)>
                            {move || toggle_label(expanded.get())}
                        </button>
                    }
                })}
            {move || {
                preview
                    .get()
                    .and_then(|index| CERTIFICATES.get(index).copied())
                    .map(|certificate| view! { <CertificatePreview certificate=certificate on_close=on_close/> })
            }}
        </section>
    }
}

#[component]
fn CertificateCard(certificate: Certificate, on_open: Callback<()>) -> impl IntoView {
    view! {
        <article class="card certificate-card">
            <img class="certificate-card__image" src=certificate.image alt=certificate.title loading="lazy"/>
            <h3>{certificate.title}</h3>
            <p class="certificate-card__meta">{certificate.organization}" · "{certificate.date}</p>
            <p>{certificate.description}</p>
            <button class="button" on:click=move |_| on_open.run(())>"View Certificate"</button>
        </article>
    }
}

/// Whether a key press should close the preview.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Fullscreen certificate image; closes on backdrop click, the close button, or Escape.
///
/// Escape is heard on the window for as long as the preview is mounted, so it
/// works without the modal holding focus.
#[component]
fn CertificatePreview(certificate: Certificate, on_close: Callback<()>) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" on:click=move |_| on_close.run(()) title="Close preview">
                    "✕"
                </button>
                <img class="modal__image" src=certificate.preview alt=format!("{} certificate", certificate.title)/>
                <h3>{certificate.title}</h3>
                <p>{certificate.organization}" · "{certificate.date}</p>
            </div>
        </div>
    }
}
