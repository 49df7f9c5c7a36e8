//! Full-height hero banner with the consultation call to action.

use leptos::prelude::*;

use crate::content::{HERO_IMAGE, HERO_SUBTITLE, HERO_TITLE, section_href};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero" style=format!("background-image: url({HERO_IMAGE})")>
            <div class="hero__overlay"></div>
            <div class="container hero__content">
                <h2 class="hero__title">{HERO_TITLE}</h2>
                <p class="hero__subtitle">{HERO_SUBTITLE}</p>
                <a class="btn btn--primary btn--lg" href=section_href("contacts")>
                    "Получить консультацию"
                </a>
            </div>
        </section>
    }
}
