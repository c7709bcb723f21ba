use leptos::prelude::*;

use super::section::{Section, SectionBackground, SectionSize};
use super::ui::{Badge, LinkButton};
use crate::shared::icons::icon;

/// Closing call-to-action band used on the home page
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <Section background=SectionBackground::Gradient size=SectionSize::Xl class="cta-section">
            <div class="cta-section__content">
                <Badge variant="inverse" class="cta-section__badge">
                    {icon("sparkles")}
                    "Ready to Transform?"
                </Badge>
                <h2 class="cta-section__title">"Start Your AI Journey Today"</h2>
                <p class="cta-section__lead">
                    "Join forward-thinking wineries already using AI to enhance their operations, improve quality, and delight customers."
                </p>
                <div class="cta-section__actions">
                    <LinkButton href="/contact" variant="inverse" size="lg">
                        "Book Your Discovery Call"
                        {icon("arrow-right")}
                    </LinkButton>
                    <LinkButton href="/services" variant="outline" size="lg" class="button--on-dark">
                        "Explore Services"
                    </LinkButton>
                </div>
                <p class="cta-section__note">
                    "No commitment required • 30-minute consultation • Custom AI roadmap"
                </p>
            </div>
        </Section>
    }
}
