use super::model::{build, RolePanel, IMPLEMENTATION_STEPS};
use crate::layout::set_page_title;
use crate::shared::components::ui::{Card, LinkButton};
use crate::shared::components::{
    BulletList, PageHero, Section, SectionBackground, SectionSize, ServiceCard,
};
use contracts::content::embedded;
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
fn RolePanelView(panel: RolePanel) -> impl IntoView {
    let heading = panel.recommended_heading();
    let RolePanel { role, services } = panel;
    let service_titles: Vec<String> = services.iter().map(|s| s.title.clone()).collect();

    view! {
        <div class="role-panel">
            <Card class="role-panel__overview">
                <h2 class="role-panel__title">{role.title}</h2>
                <p class="role-panel__description">{role.description}</p>
                <div class="role-panel__columns">
                    <div>
                        <h3>"Common Challenges"</h3>
                        <BulletList items=role.pains tone="destructive" />
                    </div>
                    <div>
                        <h3>"How AI Helps"</h3>
                        <BulletList items=service_titles />
                        <LinkButton href="/contact" size="sm">
                            "Discuss Your Needs"
                        </LinkButton>
                    </div>
                </div>
            </Card>

            <div class="role-panel__recommended">
                <h3 class="role-panel__heading">{heading}</h3>
                <div class="grid grid--3">
                    {services
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service show_details=true /> })
                        .collect_view()}
                </div>
            </div>

            <Card class="implementation">
                <h3 class="implementation__title">"Implementation Approach"</h3>
                <div class="implementation__steps">
                    {IMPLEMENTATION_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! {
                            <div class="implementation__step">
                                <div class="implementation__number">{i + 1}</div>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
pub fn SolutionsPage() -> impl IntoView {
    set_page_title(Some("Solutions"));
    let model = build(embedded());

    // Вкладка по умолчанию - первая роль
    let selected = RwSignal::new(model.default_role.clone().unwrap_or_default());
    let tabs = model.tabs();
    let panels = StoredValue::new(model.panels);

    view! {
        <PageHero
            title="Solutions by Role"
            lead="Discover how AI can address your specific challenges, whether you're focused on winemaking, operations, or guest experience."
        />

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <TabList selected_value=selected>
                {tabs
                    .into_iter()
                    .map(|(id, title)| view! { <Tab value=id>{title}</Tab> })
                    .collect_view()}
            </TabList>

            <div class="tab-content">
                {move || {
                    let id = selected.get();
                    panels
                        .with_value(|panels| panels.iter().find(|p| p.role.id == id).cloned())
                        .map(|panel| view! { <RolePanelView panel=panel /> })
                }}
            </div>
        </Section>
    }
}
