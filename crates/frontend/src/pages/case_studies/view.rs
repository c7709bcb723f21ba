use super::model::build;
use crate::layout::set_page_title;
use crate::shared::components::ui::LinkButton;
use crate::shared::components::{
    CaseStudyCard, MetricCard, PageHero, Section, SectionBackground, SectionSize,
};
use crate::shared::icons::icon;
use contracts::content::embedded;
use leptos::prelude::*;

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    set_page_title(Some("Case Studies"));
    let model = build(embedded());

    view! {
        <PageHero
            title="Success Stories"
            lead="See how wineries are transforming their operations with AI. Real results from real implementations."
        />

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <div class="grid grid--2">
                {model
                    .entries
                    .into_iter()
                    .map(|entry| view! { <CaseStudyCard case=entry.case tiles=entry.tiles /> })
                    .collect_view()}
            </div>

            <div class="aggregate-results">
                <h2 class="aggregate-results__title">"Aggregate Results"</h2>
                <div class="grid grid--3">
                    {model
                        .aggregates
                        .iter()
                        .map(|a| view! {
                            <MetricCard metric=a.metric label=a.label description=a.description />
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>

        <Section background=SectionBackground::Primary class="mission">
            <div class="mission__content">
                <h2 class="mission__title">"Ready to Write Your Success Story?"</h2>
                <p class="mission__text">
                    "Join the wineries already transforming their operations with AI."
                </p>
                <LinkButton href="/contact" variant="inverse" size="lg">
                    "Start Your Journey"
                    {icon("arrow-right")}
                </LinkButton>
            </div>
        </Section>
    }
}
