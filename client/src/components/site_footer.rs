//! Page footer.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <h3 class="site-footer__name">{OWNER_NAME}</h3>
                <p class="site-footer__tagline">{TAGLINE}</p>
                <div class="site-footer__social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|name| view! { <span class="site-footer__social-link" aria-label=*name>{*name}</span> })
                        .collect_view()}
                </div>
                <p class="site-footer__copyright">{format!("© 2024 {OWNER_NAME}. Все права защищены.")}</p>
            </div>
        </footer>
    }
}
