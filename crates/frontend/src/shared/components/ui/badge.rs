use leptos::prelude::*;

/// Pill-shaped label (categories, hero eyebrows)
#[component]
pub fn Badge(
    /// Badge variant: "primary" (default), "inverse" or "neutral"
    #[prop(optional, into)]
    variant: Option<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let variant_class = match variant.as_deref().unwrap_or("primary") {
        "inverse" => "badge--inverse",
        "neutral" => "badge--neutral",
        _ => "badge--primary",
    };

    view! {
        <span class=format!("badge {} {}", variant_class, class.unwrap_or_default())>
            {children()}
        </span>
    }
}
