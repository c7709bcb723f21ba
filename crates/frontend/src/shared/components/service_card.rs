use contracts::content::Service;
use leptos::prelude::*;

use crate::shared::icons::{icon, Icon};

/// Number of outcomes listed when a card shows details
pub const DETAIL_OUTCOMES: usize = 3;

/// Service summary card
#[component]
pub fn ServiceCard(
    service: Service,
    /// Show the first outcomes as "Key Benefits"
    #[prop(optional)]
    show_details: bool,
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let Service {
        title,
        summary,
        icon: icon_name,
        outcomes,
        ..
    } = service;

    let details = show_details.then(|| {
        view! {
            <div class="service-card__details">
                <h4 class="service-card__details-title">"Key Benefits:"</h4>
                <ul class="service-card__benefits">
                    {outcomes
                        .into_iter()
                        .take(DETAIL_OUTCOMES)
                        .map(|outcome| view! {
                            <li class="service-card__benefit">
                                <span class="service-card__dot"></span>
                                {outcome}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class=format!("card service-card {}", class.unwrap_or_default())>
            <div class="card__header service-card__header">
                <div class="service-card__icon">
                    <Icon name=icon_name fallback="brain-circuit" />
                </div>
                <h3 class="service-card__title">{title}</h3>
            </div>
            <div class="card__content">
                <p class="service-card__summary">{summary}</p>
                {details}
                <a href="/services" class="service-card__link">
                    "Learn more"
                    {icon("arrow-right")}
                </a>
            </div>
        </div>
    }
}
