use leptos::prelude::*;

/// Bullet list with a colored dot per item ("destructive", "success", "primary")
#[component]
pub fn BulletList(
    items: Vec<String>,
    #[prop(optional, into)]
    tone: Option<String>,
) -> impl IntoView {
    let tone = tone.unwrap_or_else(|| "primary".to_string());
    let dot_class = format!("bullet-list__dot bullet-list__dot--{}", tone);

    view! {
        <ul class="bullet-list">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="bullet-list__item">
                            <span class=dot_class.clone()></span>
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
