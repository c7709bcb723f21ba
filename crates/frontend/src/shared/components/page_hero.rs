use leptos::prelude::*;

use super::section::{Section, SectionBackground, SectionSize};

/// Gradient hero at the top of inner pages
#[component]
pub fn PageHero(
    #[prop(into)]
    title: String,
    #[prop(into)]
    lead: String,
) -> impl IntoView {
    view! {
        <Section background=SectionBackground::Gradient size=SectionSize::Lg class="page-hero">
            <div class="page-hero__decor" aria-hidden="true">
                <span class="page-hero__bubble page-hero__bubble--a"></span>
                <span class="page-hero__bubble page-hero__bubble--b"></span>
                <span class="page-hero__bubble page-hero__bubble--c"></span>
            </div>
            <div class="page-hero__content">
                <h1 class="page-hero__title animate-slide-up">{title}</h1>
                <p class="page-hero__lead animate-slide-up">{lead}</p>
            </div>
        </Section>
    }
}
