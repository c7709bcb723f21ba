use super::model::{build, expertise_columns, Founder};
use crate::layout::set_page_title;
use crate::shared::components::ui::{Card, LinkButton};
use crate::shared::components::{PageHero, Section, SectionBackground, SectionHeading, SectionSize};
use crate::shared::icons::{icon, Icon};
use contracts::content::embedded;
use leptos::prelude::*;

#[component]
fn FounderProfile(founder: Founder) -> impl IntoView {
    let (left, right) = expertise_columns(founder.expertise);
    let column = |items: Vec<&'static str>| {
        view! {
            <div class="founder__expertise-column">
                {items
                    .into_iter()
                    .map(|item| view! { <div class="founder__skill">{item}</div> })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <Card class="founder">
            <div class="founder__grid">
                <div class="founder__aside">
                    <div class="founder__photo">{founder.initials}</div>
                    <h2 class="founder__name">{founder.name}</h2>
                    <p class="founder__title">{founder.title}</p>
                    <div class="founder__links">
                        <LinkButton href=founder.linkedin variant="outline" size="sm" external=true>
                            {icon("linkedin")}
                            "LinkedIn"
                        </LinkButton>
                        <LinkButton href=format!("mailto:{}", founder.email) variant="outline" size="sm">
                            {icon("mail")}
                            "Email"
                        </LinkButton>
                    </div>
                </div>
                <div class="founder__bio">
                    <h3>"Background"</h3>
                    <p>{founder.background}</p>
                    <h3>"Why Wineries?"</h3>
                    <p>{founder.why_wineries}</p>
                    <h3>"Technical Expertise"</h3>
                    <div class="founder__expertise">{column(left)} {column(right)}</div>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    set_page_title(Some("About"));
    let model = build(embedded());

    view! {
        <PageHero title=model.title lead=model.lead />

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <FounderProfile founder=model.founder />
        </Section>

        <Section size=SectionSize::Xl>
            <SectionHeading
                title="Our Values"
                subtitle="The principles that guide every project and partnership."
            />
            <div class="grid grid--3">
                {model
                    .values
                    .iter()
                    .map(|value| view! {
                        <Card class="value-card">
                            <div class="value-card__icon">
                                <Icon name=value.icon />
                            </div>
                            <h3 class="value-card__title">{value.title}</h3>
                            <p class="value-card__text">{value.description}</p>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </Section>

        <Section background=SectionBackground::Primary class="mission">
            <div class="mission__content">
                <h2 class="mission__title">"Our Mission"</h2>
                <p class="mission__text">{model.mission}</p>
                <div class="mission__actions">
                    <LinkButton href="/contact" variant="inverse" size="lg">
                        "Start a Conversation"
                    </LinkButton>
                    <LinkButton href="/services" variant="outline" size="lg" class="button--on-dark">
                        "Explore Services"
                    </LinkButton>
                </div>
            </div>
        </Section>
    }
}
