use contracts::domain::common::{FieldKind, FieldSpec};
use contracts::shared::i18n;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::layout::global_context::use_global;
use crate::shared::api_utils::AppConfig;

/// File picker for an image or document field.
///
/// Shows the stored file, if any, and keeps the newly chosen file in `file`
/// without touching the stored path; the form decides what to do with it on
/// submit.
#[component]
pub fn FileInput(
    field: FieldSpec,
    /// Stored path of the record being edited, empty on create
    #[prop(into)]
    current: Signal<String>,
    file: RwSignal<Option<File>, LocalStorage>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_global();
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let is_image = field.kind == FieldKind::Image;

    let on_change = move |ev: leptos::ev::Event| {
        let picked = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        if let Some(f) = &picked {
            log::debug!("selected {} ({} bytes) for {}", f.name(), f.size(), field.key);
        }
        file.set(picked);
    };

    // a required file may only be left empty when one is already stored
    let input_required = move || field.required && current.with(|c| c.trim().is_empty());

    view! {
        <div class="form__group form__file">
            <label class="form__label" for=field.key>
                {move || ctx.t(field.label)}
                {field.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>

            {move || {
                let stored = current.get();
                (!stored.trim().is_empty()).then(|| {
                    let url = config.media_url(&stored);
                    let preview = if is_image {
                        view! { <img class="form__file-thumb" src=url alt=stored.clone() /> }.into_any()
                    } else {
                        view! {
                            <a href=url target="_blank" rel="noopener">{move || ctx.t(i18n::OPEN_FILE)}</a>
                        }
                        .into_any()
                    };
                    view! {
                        <div class="form__file-current">
                            <span class="form__hint">{move || ctx.t(i18n::CURRENT_FILE)}": "</span>
                            {preview}
                        </div>
                    }
                })
            }}

            <input
                id=field.key
                type="file"
                class="form__input"
                accept=if is_image { "image/*" } else { "" }
                required=input_required
                disabled=move || disabled.get()
                on:change=on_change
            />

            {move || file.with(|f| f.as_ref().map(|f| f.name())).map(|name| view! {
                <div class="form__file-new">
                    <span class="form__hint">{move || ctx.t(i18n::NEW_FILE)}": "</span>
                    {name}
                </div>
            })}
        </div>
    }
}
