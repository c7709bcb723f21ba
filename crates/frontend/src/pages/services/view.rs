use super::model::{build, QuickNavLink, ServiceEntry};
use crate::layout::set_page_title;
use crate::shared::components::ui::{Card, LinkButton};
use crate::shared::components::{BulletList, PageHero, Section, SectionBackground, SectionSize};
use crate::shared::icons::icon;
use contracts::content::embedded;
use leptos::prelude::*;

#[component]
fn ServiceDetail(entry: ServiceEntry) -> impl IntoView {
    let ServiceEntry { number, service } = entry;

    view! {
        <div id=service.id.clone() class="service-detail animate-scale-in">
            <Card class="service-detail__card">
                <div class="service-detail__header">
                    <div class="service-detail__number">{number}</div>
                    <div>
                        <h2 class="service-detail__title">{service.title}</h2>
                        <p class="service-detail__summary">{service.summary}</p>
                    </div>
                </div>

                <div class="service-detail__block">
                    <h3>"Common Challenges"</h3>
                    <BulletList items=service.problems tone="destructive" />
                </div>
                <div class="service-detail__block">
                    <h3>"What We Deliver"</h3>
                    <BulletList items=service.deliverables tone="success" />
                </div>
                <div class="service-detail__pilot">
                    <h3>"Start Small"</h3>
                    <p>{service.pilot}</p>
                </div>
                <div class="service-detail__block">
                    <h3>"Expected Outcomes"</h3>
                    <div class="service-detail__outcomes">
                        <BulletList items=service.outcomes />
                    </div>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ServicesSidebar(links: Vec<QuickNavLink>) -> impl IntoView {
    view! {
        <aside class="services-sidebar">
            <Card class="services-sidebar__card">
                <h3 class="services-sidebar__title">"Ready to Get Started?"</h3>
                <p class="services-sidebar__text">
                    "Book a discovery call to discuss how these services can transform your winery."
                </p>
                <LinkButton href="/contact" variant="inverse" class="button--block">
                    "Book Discovery Call"
                </LinkButton>
                <LinkButton href="/case-studies" variant="outline" class="button--block button--on-dark">
                    "View Case Studies"
                </LinkButton>
                <div class="services-sidebar__nav">
                    <h4>"Quick Navigation"</h4>
                    <ul>
                        {links
                            .into_iter()
                            .map(|link| view! {
                                <li>
                                    <a href=link.href class="services-sidebar__link">
                                        {icon("external-link")}
                                        {link.label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Card>
        </aside>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    set_page_title(Some("Services"));
    let model = build(embedded());

    view! {
        <PageHero
            title="AI Services for Wineries"
            lead="Comprehensive AI solutions designed specifically for the wine industry. From vineyard to visitor, we help you optimize every aspect of your operation."
        />

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <div class="services-layout">
                <div class="services-layout__main">
                    {model
                        .entries
                        .into_iter()
                        .map(|entry| view! { <ServiceDetail entry=entry /> })
                        .collect_view()}
                </div>
                <ServicesSidebar links=model.quick_nav />
            </div>
        </Section>
    }
}
