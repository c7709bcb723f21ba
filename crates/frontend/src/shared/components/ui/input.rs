use leptos::prelude::*;

/// Input component with label and field error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: Option<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element, also used as `name`
    #[prop(optional, into)]
    id: Option<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: Option<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let input_id = id.unwrap_or_default();
    let additional_class = class.unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=input_id.clone()>
                    {l}
                </label>
            })}
            <input
                id=input_id.clone()
                name=input_id.clone()
                class=move || {
                    let invalid = if has_error() { " form__input--invalid" } else { "" };
                    format!("form__input{} {}", invalid, additional_class)
                }
                type=input_type.unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                autocomplete=autocomplete.unwrap_or_default()
                aria-invalid=move || has_error().to_string()
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
