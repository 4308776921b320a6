use contracts::domain::common::{FieldKind, FieldSpec};
use contracts::shared::form_draft::FormDraft;
use leptos::prelude::*;

use super::html_editor::HtmlEditor;
use super::ui::Input;
use crate::layout::global_context::use_global;

/// One label, three inputs: a localized field edited per language.
#[component]
pub fn LocalizedInput(
    field: FieldSpec,
    draft: RwSignal<FormDraft>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_global();

    view! {
        <fieldset class="form__localized">
            <legend class="form__label">
                {move || ctx.t(field.label)}
                {field.required.then(|| view! { <span class="form__required">" *"</span> })}
            </legend>
            {field
                .localized_keys()
                .into_iter()
                .map(|(lang, key)| {
                    let value = {
                        let key = key.clone();
                        Signal::derive(move || draft.with(|d| d.get(&key).to_string()))
                    };
                    let on_change = {
                        let key = key.clone();
                        Callback::new(move |v: String| draft.update(|d| d.set(key.clone(), v)))
                    };
                    let editor = match field.kind {
                        FieldKind::Html => view! {
                            <HtmlEditor
                                id=key.clone()
                                value=value
                                on_change=on_change
                                required=field.required
                                disabled=disabled
                            />
                        }
                        .into_any(),
                        _ => view! {
                            <Input
                                id=key.clone()
                                value=value
                                on_input=on_change
                                required=field.required
                                disabled=disabled
                            />
                        }
                        .into_any(),
                    };
                    view! {
                        <div class="form__localized-row">
                            <span class="form__lang-tag">{lang.tag()}</span>
                            <div class="form__localized-input">{editor}</div>
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
