use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_global;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Unknown route, unknown resource, or a screen the resource does not offer.
#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_global();

    view! {
        <PageFrame entity="not-found" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <h1 class="page__title">{move || ctx.t(i18n::NOT_FOUND)}</h1>
                <A href=routes::DASHBOARD attr:class="button button--secondary">
                    {move || ctx.t(i18n::DASHBOARD)}
                </A>
            </div>
        </PageFrame>
    }
}
