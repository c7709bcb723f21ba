use leptos::prelude::*;

/// Card container with optional header block
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Rendered above the body when present
    #[prop(optional)]
    header: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let classes = format!("card {}", class.unwrap_or_default());

    view! {
        <div class=classes>
            {header.map(|h| view! { <div class="card__header">{h()}</div> })}
            <div class="card__content">{children()}</div>
        </div>
    }
}
