//! Contact form bound to a `ContactFormState` signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presence of every field is enforced by `required` inputs; the browser
//! refuses to fire `submit` until all four are filled. The in-flight guard
//! lives in `net::contact::submit`, the disabled button only mirrors it.

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, FormField};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::contact::{BrowserTransport, CONTACT_ENDPOINT, SubmitOutcome, submit};

            match submit(&form, &BrowserTransport, CONTACT_ENDPOINT).await {
                SubmitOutcome::Failed(e) => log::warn!("contact form submission failed: {e}"),
                SubmitOutcome::Suppressed => log::debug!("contact form submission already in flight"),
                SubmitOutcome::Delivered => {}
            }
        });
    };

    let banner = move || {
        let status = form.with(|s| s.status);
        status
            .banner()
            .map(|text| view! { <div class=status.banner_class() role="status">{text}</div> })
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <FieldInput form=form field=FormField::Name label="Ваше имя" placeholder="Иван Иванов"/>
            <FieldInput form=form field=FormField::Phone label="Телефон" placeholder="+7 (___) ___-__-__" input_type="tel"/>
            <FieldInput form=form field=FormField::Email label="Email" placeholder="email@example.com" input_type="email"/>
            <label class="contact-form__field">
                <span class="contact-form__label">"Опишите ваш проект"</span>
                <textarea
                    class="contact-form__input contact-form__input--multiline"
                    placeholder="Расскажите о том, какие работы вас интересуют..."
                    required=true
                    prop:value=move || form.with(|s| s.draft.message.clone())
                    on:input=move |ev| form.update(|s| s.draft.set_field(FormField::Message, event_target_value(&ev)))
                ></textarea>
            </label>
            {banner}
            <button
                class="btn btn--primary contact-form__submit"
                type="submit"
                disabled=move || form.with(|s| s.in_flight)
            >
                {move || form.with(ContactFormState::submit_label)}
            </button>
        </form>
    }
}

/// Single-line required input bound to one draft field.
#[component]
fn FieldInput(
    form: RwSignal<ContactFormState>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="contact-form__field">
            <span class="contact-form__label">{label}</span>
            <input
                class="contact-form__input"
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || form.with(|s| s.draft.field(field).to_owned())
                on:input=move |ev| form.update(|s| s.draft.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}
