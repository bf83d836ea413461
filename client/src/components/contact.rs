//! Contact form bound to a per-form `ContactForm` signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns the signal; all transitions go through `ContactForm` so
//! the view only maps events in and phase/status out. Each attempt schedules a
//! revert with its own ticket; stale timers find the ticket superseded and do
//! nothing.
//!
//! A picked file is recorded from its metadata first and read in the
//! background; submit stays disabled until the read lands. The native file
//! input is emptied whenever the slot is, so picking the same file again
//! still fires `change`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::relay::EmailJsRelay;
use crate::state::contact::{ContactForm, ContactPayload, Field, Phase, RevertTicket, StatusLine, SubmitBlocked};
use crate::util::attachment::{ACCEPTED_EXTENSIONS, format_size};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let relay = StoredValue::new(EmailJsRelay::from_build_env());
    let file_input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let empty = form.with(|f| f.attachment_slot().is_none());

        #[cfg(feature = "hydrate")]
        {
            if empty {
                if let Some(input) = file_input.get() {
                    input.set_value("");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = empty;
    });

    let on_field = move |field: Field| {
        move |ev: leptos::ev::Event| form.update(|f| f.update_field(field, event_target_value(&ev)))
    };
    let field_value = move |field: Field| move || form.with(|f| f.field(field).to_owned());

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let size = crate::util::attachment::blob_size(file.size());
            let Some(ticket) = form.try_update(|f| f.pick_attachment(file.name(), size)).flatten() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::attachment::read_file(file).await {
                    Ok(attachment) => {
                        let _ = form.try_update(|f| f.attach_loaded(ticket, attachment));
                    }
                    Err(e) => {
                        log::warn!("attachment read failed: {e}");
                        let _ = form.try_update(|f| f.abandon_read(ticket));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(payload)) => dispatch(form, relay, payload),
            Some(Err(SubmitBlocked::Invalid(ticket))) => schedule_revert(form, ticket),
            Some(Err(SubmitBlocked::InFlight | SubmitBlocked::AttachmentLoading)) | None => {}
        }
    };

    let submitting = move || form.with(|f| f.phase() == Phase::Submitting);
    let counter_class = move || {
        if form.with(ContactForm::over_word_limit) {
            "contact-form__counter contact-form__counter--over"
        } else {
            "contact-form__counter"
        }
    };
    let attachment_label = move || {
        form.with(|f| match f.attachment_slot() {
            Some(slot) if slot.is_loading() => {
                format!("{} ({}, reading...)", slot.file_name(), format_size(slot.size()))
            }
            Some(slot) => format!("{} ({})", slot.file_name(), format_size(slot.size())),
            None => "Attach a file (optional)".to_owned(),
        })
    };
    let status = move || {
        form.with(ContactForm::status_line).map(|line| match line {
            StatusLine::Success(text) => {
                view! { <p class="contact-form__status contact-form__status--success">{text}</p> }.into_any()
            }
            StatusLine::Error(text) => {
                view! { <p class="contact-form__status contact-form__status--error">{text}</p> }.into_any()
            }
        })
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Let's Connect!"</h2>
            <p class="contact__intro">"Drop me a message and I'll get back to you soon!"</p>
            <form class="card contact-form" on:submit=on_submit>
                <label class="contact-form__label">
                    "Name"
                    <input
                        type="text"
                        name=Field::Name.as_str()
                        required
                        placeholder="Your name"
                        prop:value=field_value(Field::Name)
                        on:input=on_field(Field::Name)
                    />
                </label>
                <label class="contact-form__label">
                    "Email"
                    <input
                        type="email"
                        name=Field::Email.as_str()
                        required
                        placeholder="you@example.com"
                        prop:value=field_value(Field::Email)
                        on:input=on_field(Field::Email)
                    />
                </label>
                <label class="contact-form__label">
                    <span class="contact-form__label-row">
                        "Message"
                        <span class=counter_class>{move || form.with(ContactForm::word_counter_label)}</span>
                    </span>
                    <textarea
                        name=Field::Message.as_str()
                        rows="4"
                        required
                        placeholder="Your message"
                        prop:value=field_value(Field::Message)
                        on:input=on_field(Field::Message)
                    ></textarea>
                </label>
                <div class="contact-form__attachment">
                    <input
                        type="file"
                        id="contact-attachment"
                        class="contact-form__file"
                        accept=ACCEPTED_EXTENSIONS
                        node_ref=file_input
                        on:change=on_file
                    />
                    <label for="contact-attachment" class="contact-form__file-label">{attachment_label}</label>
                    <Show when=move || form.with(|f| f.attachment_slot().is_some())>
                        <button
                            type="button"
                            class="contact-form__file-clear"
                            title="Remove attachment"
                            on:click=move |_| form.update(|f| f.set_attachment(None))
                        >
                            "✕"
                        </button>
                    </Show>
                </div>
                <button
                    type="submit"
                    class="button button--primary contact-form__submit"
                    disabled=move || !form.with(ContactForm::can_submit)
                >
                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                </button>
                {status}
            </form>
        </section>
    }
}

/// Hand the payload to the relay and record the outcome.
fn dispatch(form: RwSignal<ContactForm>, relay: StoredValue<EmailJsRelay>, payload: ContactPayload) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::relay::EmailRelay;

        let outcome = relay.get_value().send(&payload).await;
        if let Err(e) = &outcome {
            log::warn!("contact relay failed: {e}");
        }
        if let Some(ticket) = form.try_update(|f| f.finish_submit(outcome)) {
            schedule_revert(form, ticket);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (form, relay, payload);
}

/// Return the form to `Idle` once the revert window passes, unless a newer
/// attempt has started since.
fn schedule_revert(form: RwSignal<ContactForm>, ticket: RevertTicket) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::contact::REVERT_WINDOW;

        let millis = u32::try_from(REVERT_WINDOW.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            let _ = form.try_update(|f| f.revert(ticket));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (form, ticket);
}
