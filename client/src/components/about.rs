//! About section with the "why choose me" list.

use leptos::prelude::*;

use crate::content::{HIGHLIGHTS, OWNER_NAME};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section section--accent">
            <div class="container container--narrow">
                <h2 class="section__title">"Обо мне"</h2>
                <div class="card about-card">
                    <p>
                        "Здравствуйте! Меня зовут "
                        <span class="about-card__name">{OWNER_NAME}</span>
                        ", и я занимаюсь укладкой элитного паркета и отделкой помещений уже более 15 лет."
                    </p>
                    <p>
                        "Моя специализация — работа с премиальными материалами и создание эксклюзивных интерьеров. "
                        "Каждый проект для меня — это возможность воплотить уникальное видение клиента с максимальным "
                        "вниманием к деталям."
                    </p>
                    <div class="about-card__highlights">
                        <h3>"Почему выбирают меня:"</h3>
                        <ul>
                            {HIGHLIGHTS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    </div>
                    <p>
                        "Я постоянно совершенствую свои навыки, слежу за новыми технологиями и трендами в отделке. "
                        "Для меня важно не просто выполнить работу, а создать пространство, которое будет радовать "
                        "вас долгие годы."
                    </p>
                </div>
            </div>
        </section>
    }
}
