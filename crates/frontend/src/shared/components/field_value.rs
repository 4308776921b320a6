//! Read-only rendering of record fields for list tables and detail screens.

use contracts::domain::common::{FieldKind, FieldSpec};
use contracts::shared::format::{cell_text, format_timestamp, raw_value};
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::Value;

use crate::layout::global_context::use_global;
use crate::shared::api_utils::AppConfig;

const EMPTY: &str = "—";

/// Table cell content: a thumbnail for images, short plain text otherwise.
#[component]
pub fn ListCell(field: FieldSpec, record: Value) -> impl IntoView {
    let ctx = use_global();

    if field.kind == FieldKind::Image {
        let stored = raw_value(&record, field.key);
        if stored.trim().is_empty() {
            return view! { <span class="muted">{EMPTY}</span> }.into_any();
        }
        let config = use_context::<AppConfig>().expect("AppConfig not found");
        return view! {
            <img class="table__thumb" src=config.media_url(&stored) alt="" loading="lazy" />
        }
        .into_any();
    }

    view! { <span>{move || cell_text(&field, &record, ctx.lang.get())}</span> }.into_any()
}

/// Full value of one field on the detail screen. Localized fields show every
/// language with its tag.
#[component]
pub fn FieldValue(field: FieldSpec, record: Value) -> impl IntoView {
    if field.localized {
        return field
            .localized_keys()
            .into_iter()
            .map(|(lang, key)| {
                let text = raw_value(&record, &key);
                view! {
                    <div class="field-value__localized">
                        <span class="form__lang-tag">{lang.tag()}</span>
                        {render_value(field.kind, text)}
                    </div>
                }
            })
            .collect_view()
            .into_any();
    }

    render_value(field.kind, raw_value(&record, field.key))
}

fn render_value(kind: FieldKind, text: String) -> AnyView {
    if text.trim().is_empty() {
        return view! { <span class="muted">{EMPTY}</span> }.into_any();
    }

    match kind {
        FieldKind::Html | FieldKind::Iframe => {
            view! { <div class="field-value__html" inner_html=text></div> }.into_any()
        }
        FieldKind::Image => {
            let config = use_context::<AppConfig>().expect("AppConfig not found");
            view! { <img class="field-value__image" src=config.media_url(&text) alt=text.clone() /> }
                .into_any()
        }
        FieldKind::Document => {
            let ctx = use_global();
            let config = use_context::<AppConfig>().expect("AppConfig not found");
            view! {
                <a href=config.media_url(&text) target="_blank" rel="noopener">
                    {move || ctx.t(i18n::OPEN_FILE)}
                </a>
            }
            .into_any()
        }
        FieldKind::Email => {
            view! { <a href=format!("mailto:{}", text)>{text.clone()}</a> }.into_any()
        }
        FieldKind::ForeignKey(parent) => match text.trim().parse::<i64>() {
            Ok(id) => view! { <A href=routes::view(parent, id)>{format!("#{}", id)}</A> }.into_any(),
            Err(_) => view! { <span>{text}</span> }.into_any(),
        },
        FieldKind::Timestamp => view! { <span>{format_timestamp(&text)}</span> }.into_any(),
        FieldKind::Text => view! { <span>{text}</span> }.into_any(),
    }
}
