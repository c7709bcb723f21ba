use leptos::prelude::*;

/// Key statistic: big value, label and an optional description
#[component]
pub fn MetricCard(
    #[prop(into)]
    metric: String,
    #[prop(into)]
    label: String,
    /// Omitted from the markup when absent
    #[prop(optional, into)]
    description: Option<String>,
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("card metric-card {}", class.unwrap_or_default())>
            <div class="metric-card__value">{metric}</div>
            <div class="metric-card__label">{label}</div>
            {description.map(|d| view! { <div class="metric-card__description">{d}</div> })}
        </div>
    }
}
