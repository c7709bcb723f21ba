use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: Option<String>,
    /// Validation message shown under the checkbox
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let checkbox_id = id.unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);
    let additional_class = class.unwrap_or_default();
    let wrapper_class = move || {
        if is_disabled() {
            format!(
                "form__checkbox-wrapper form__checkbox-wrapper--disabled {}",
                additional_class
            )
        } else {
            format!("form__checkbox-wrapper {}", additional_class)
        }
    };

    view! {
        <div class="form__group">
            <div class=wrapper_class>
                <input
                    id=checkbox_id.clone()
                    name=checkbox_id.clone()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=is_disabled
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <label class="form__checkbox-label" for=checkbox_id>
                    {label}
                </label>
            </div>
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
