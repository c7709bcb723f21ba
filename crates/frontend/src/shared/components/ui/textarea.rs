use leptos::prelude::*;

/// Textarea component with label and field error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element, also used as `name`
    #[prop(optional, into)]
    id: Option<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let textarea_id = id.unwrap_or_default();
    let additional_class = class.unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=textarea_id.clone()>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id.clone()
                name=textarea_id.clone()
                class=move || {
                    let invalid = if has_error() { " form__input--invalid" } else { "" };
                    format!("form__textarea{} {}", invalid, additional_class)
                }
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                rows=rows.unwrap_or(5)
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
