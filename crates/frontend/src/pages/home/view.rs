use super::model::{build, FeaturedCase, TRUSTED_BY};
use crate::layout::set_page_title;
use crate::shared::components::ui::{Card, LinkButton};
use crate::shared::components::{
    CaseQuote, CtaSection, MetricCard, Section, SectionBackground, SectionHeading, SectionSize,
    ServiceCard,
};
use crate::shared::icons::{icon, Icon};
use contracts::content::embedded;
use leptos::prelude::*;

#[component]
fn FeaturedCaseCard(featured: FeaturedCase) -> impl IntoView {
    let FeaturedCase { case, tiles } = featured;

    view! {
        <Card class="featured-case">
            <div class="featured-case__grid">
                <div>
                    <span class="badge badge--primary">{case.category}</span>
                    <h3 class="featured-case__title">{case.title}</h3>
                    <p class="featured-case__impact">{case.impact}</p>
                    <CaseQuote quote=case.quote client=case.client />
                    <LinkButton href="/case-studies" variant="outline">
                        "View All Case Studies"
                        {icon("arrow-right")}
                    </LinkButton>
                </div>
                <div class="featured-case__metrics">
                    {tiles
                        .into_iter()
                        .map(|t| view! { <MetricCard metric=t.value label=t.label /> })
                        .collect_view()}
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    set_page_title(None);
    let model = build(embedded());

    view! {
        <Section size=SectionSize::Xl class="home-hero">
            <div class="home-hero__backdrop" aria-hidden="true"></div>
            <div class="home-hero__content">
                <h1 class="home-hero__title">{model.tagline}</h1>
                <p class="home-hero__lead">{model.description}</p>
                <div class="home-hero__actions">
                    <LinkButton href="/contact" size="lg">
                        {model.cta_primary}
                        {icon("arrow-right")}
                    </LinkButton>
                    <LinkButton href="/services" variant="outline" size="lg">
                        {model.cta_secondary}
                    </LinkButton>
                </div>
            </div>
        </Section>

        <Section size=SectionSize::Sm background=SectionBackground::Muted class="trust-bar">
            <p class="trust-bar__caption">"Trusted by wineries across the globe"</p>
            <div class="trust-bar__logos">
                {TRUSTED_BY
                    .iter()
                    .map(|name| view! { <div class="trust-bar__logo">{*name}</div> })
                    .collect_view()}
            </div>
        </Section>

        <Section size=SectionSize::Xl>
            <SectionHeading
                title="Five Pillars of AI Excellence"
                subtitle="Comprehensive AI solutions designed specifically for wineries, from vineyard management to guest experience."
            />
            <div class="grid grid--3">
                {model
                    .services
                    .into_iter()
                    .map(|service| view! { <ServiceCard service=service /> })
                    .collect_view()}
            </div>
        </Section>

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <SectionHeading
                title="Why Our Approach Works"
                subtitle="Three principles that ensure successful AI implementation in your winery."
            />
            <div class="grid grid--3">
                {model
                    .why_it_works
                    .into_iter()
                    .map(|item| view! {
                        <Card class="why-card">
                            <div class="why-card__icon">
                                <Icon name=item.icon fallback="cpu" />
                            </div>
                            <h3 class="why-card__title">{item.title}</h3>
                            <p class="why-card__text">{item.description}</p>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </Section>

        <Section size=SectionSize::Xl>
            <SectionHeading
                title="Real Results"
                subtitle="See how AI transformed operations for one of our winery partners."
            />
            {model.featured.map(|featured| view! { <FeaturedCaseCard featured=featured /> })}
        </Section>

        <CtaSection />
    }
}
