use crate::layout::set_page_title;
use crate::shared::components::ui::LinkButton;
use crate::shared::components::{Section, SectionSize};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_page_title(Some("Page Not Found"));

    view! {
        <Section size=SectionSize::Xl class="not-found">
            <div class="not-found__content">
                <p class="not-found__code">"404"</p>
                <h1 class="not-found__title">"Page not found"</h1>
                <p class="not-found__text">
                    "The page you are looking for does not exist or has moved."
                </p>
                <LinkButton href="/">"Return to Home"</LinkButton>
            </div>
        </Section>
    }
}
