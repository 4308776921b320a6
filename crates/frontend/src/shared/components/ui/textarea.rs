use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<Signal<String>>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Monospace font, used for raw markup
    #[prop(optional)]
    monospace: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let class = if monospace {
        "form__textarea form__textarea--mono"
    } else {
        "form__textarea"
    };

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {move || l.get()}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <textarea
                id=textarea_id
                class=class
                placeholder=textarea_placeholder
                disabled=move || disabled.get()
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
