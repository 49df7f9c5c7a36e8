//! The single landing page: sections stacked in reading order.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contacts::ContactsSection;
use crate::components::hero::HeroSection;
use crate::components::portfolio::PortfolioSection;
use crate::components::services::ServicesSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::SiteNav;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <SiteNav/>
            <main>
                <HeroSection/>
                <ServicesSection/>
                <PortfolioSection/>
                <AboutSection/>
                <ContactsSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
