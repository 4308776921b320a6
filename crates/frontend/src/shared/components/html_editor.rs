//! Rich-text field boundary.
//!
//! The form only deals in an HTML string: the current value goes in, every
//! change comes back through `on_change`. Markup is edited as source with a
//! live rendered preview underneath.

use contracts::shared::i18n;
use leptos::prelude::*;

use super::ui::Textarea;
use crate::layout::global_context::use_global;

#[component]
pub fn HtmlEditor(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_global();

    view! {
        <div class="html-editor">
            <Textarea
                id=id
                value=value
                on_input=on_change
                required=required
                disabled=disabled
                rows=8
                monospace=true
            />
            <Show when=move || value.with(|v| !v.trim().is_empty())>
                <div class="html-editor__preview">
                    <div class="html-editor__preview-label">{move || ctx.t(i18n::PREVIEW)}</div>
                    <div class="html-editor__preview-body" inner_html=move || value.get()></div>
                </div>
            </Show>
        </div>
    }
}
