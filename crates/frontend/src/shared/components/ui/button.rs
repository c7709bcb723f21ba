use leptos::prelude::*;

/// CSS classes for a button-styled element.
///
/// Variants: "primary" (default), "outline", "ghost", "inverse" (white on the
/// wine gradient). Sizes: "sm", "md" (default), "lg".
pub fn button_class(variant: Option<&str>, size: Option<&str>) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "inverse" => "button--inverse",
        _ => "button--primary",
    };
    let size_class = match size.unwrap_or("md") {
        "sm" => "button--sm",
        "lg" => "button--lg",
        _ => "button--md",
    };
    format!("button {} {}", variant_class, size_class)
}

/// Button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "ghost" or "inverse"
    #[prop(optional, into)]
    variant: Option<String>,
    /// Button size: "sm", "md" (default) or "lg"
    #[prop(optional, into)]
    size: Option<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: Option<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{} {}",
        button_class(variant.as_deref(), size.as_deref()),
        class.unwrap_or_default()
    );
    let btn_type = button_type.unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Anchor styled as a button. In-app paths are picked up by the router;
/// `external` opens the link in a new tab.
#[component]
pub fn LinkButton(
    #[prop(into)]
    href: String,
    #[prop(optional, into)]
    variant: Option<String>,
    #[prop(optional, into)]
    size: Option<String>,
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)]
    external: bool,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{} {}",
        button_class(variant.as_deref(), size.as_deref()),
        class.unwrap_or_default()
    );

    view! {
        <a
            href=href
            class=classes
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_defaults() {
        assert_eq!(button_class(None, None), "button button--primary button--md");
    }

    #[test]
    fn test_button_class_unknown_variant_falls_back() {
        assert_eq!(
            button_class(Some("sparkly"), Some("lg")),
            "button button--primary button--lg"
        );
        assert_eq!(
            button_class(Some("outline"), Some("sm")),
            "button button--outline button--sm"
        );
    }
}
