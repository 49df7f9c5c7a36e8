//! Portfolio image grid.

use leptos::prelude::*;

use crate::content::{PORTFOLIO_IMAGES, portfolio_alt};

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id="portfolio" class="section">
            <div class="container">
                <h3 class="section__title">"Портфолио работ"</h3>
                <div class="card-grid">
                    {PORTFOLIO_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(index, src)| {
                            view! {
                                <figure class="portfolio-item">
                                    <img class="portfolio-item__image" src=*src alt=portfolio_alt(index) loading="lazy"/>
                                    <figcaption class="portfolio-item__caption">"Премиальный проект"</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
