//! Services grid.

use leptos::prelude::*;

use crate::content::SERVICES;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="section section--accent">
            <div class="container">
                <h2 class="section__title">"Услуги"</h2>
                <p class="section__lead">
                    "Предоставляю полный спектр работ по отделке помещений премиум-класса"
                </p>
                <div class="card-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <article class="card service-card">
                                    <h3 class="service-card__title">{service.title}</h3>
                                    <p class="service-card__text">{service.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
