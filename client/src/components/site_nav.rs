//! Fixed top navigation with section anchors.

use leptos::prelude::*;

use crate::content::{NAV_SECTIONS, OWNER_NAME, section_href};

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="container site-nav__inner">
                <a class="site-nav__brand" href=section_href("home")>{OWNER_NAME}</a>
                <div class="site-nav__links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <a class="site-nav__link" href=section_href(section.id)>
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
