use contracts::domain::common::{FieldSpec, ResourceKind};
use contracts::shared::form_draft::FormDraft;
use contracts::shared::i18n;
use contracts::shared::list_view::parent_options;
use contracts::shared::urls::api_path;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::ui::Select;
use crate::layout::global_context::use_global;
use crate::shared::http::use_api;

/// Picker for a foreign key field, filled from the parent collection.
#[component]
pub fn ParentSelect(
    field: FieldSpec,
    parent: ResourceKind,
    draft: RwSignal<FormDraft>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_global();
    let api = use_api();
    let records = RwSignal::new(Vec::<Value>::new());
    let (load_failed, set_load_failed) = signal(false);

    spawn_local(async move {
        match api.get_list::<Value>(&api_path(parent, None)).await {
            Ok(rows) => records.set(rows),
            Err(e) => {
                log::error!("failed to load {} for {}: {}", parent.path(), field.key, e);
                if !e.requires_login() {
                    set_load_failed.set(true);
                }
            }
        }
    });

    let options = Signal::derive(move || {
        let lang = ctx.lang.get();
        records.with(|rows| {
            parent_options(parent.def(), rows, lang)
                .into_iter()
                .map(|(id, caption)| (id.to_string(), format!("#{} {}", id, caption)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Select
            id=field.key
            label=Signal::derive(move || ctx.t(field.label).to_string())
            value=Signal::derive(move || draft.with(|d| d.get(field.key).to_string()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.set(field.key, v)))
            options=options
            placeholder=Signal::derive(move || ctx.t(i18n::SELECT_PLACEHOLDER).to_string())
            required=field.required
            disabled=disabled
        />
        <Show when=move || load_failed.get()>
            <div class="form__error">{move || ctx.t(i18n::ERROR_LOADING)}</div>
        </Show>
    }
}
