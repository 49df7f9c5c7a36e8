//! Contacts section: the form plus always-available phone/email fallbacks.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::content::{EMAIL, LOCATION, PHONE_DISPLAY, mailto_href, tel_href};

#[component]
pub fn ContactsSection() -> impl IntoView {
    view! {
        <section id="contacts" class="section">
            <div class="container container--narrow">
                <h2 class="section__title">"Контакты"</h2>
                <p class="section__lead">"Свяжитесь со мной для консультации и расчета стоимости"</p>
                <div class="card contact-card">
                    <ContactForm/>
                    <ul class="contact-channels">
                        <li class="contact-channels__item">
                            <a href=tel_href(PHONE_DISPLAY)>{PHONE_DISPLAY}</a>
                        </li>
                        <li class="contact-channels__item">
                            <a href=mailto_href(EMAIL)>{EMAIL}</a>
                        </li>
                        <li class="contact-channels__item">{LOCATION}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
