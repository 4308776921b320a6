//! Sidebar with one entry per managed resource, in dashboard order.

use contracts::domain::common::ResourceKind;
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_global;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global();

    view! {
        <nav class="sidebar">
            <A href=routes::DASHBOARD attr:class="sidebar__item sidebar__item--home" exact=true>
                {icon("folder-open")}
                <span>{move || ctx.t(i18n::DASHBOARD)}</span>
            </A>
            {ResourceKind::ALL
                .into_iter()
                .map(|kind| {
                    let title = kind.def().title;
                    view! {
                        <A href=routes::list(kind) attr:class="sidebar__item">
                            {icon("folder-closed")}
                            <span>{move || ctx.t(title)}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
