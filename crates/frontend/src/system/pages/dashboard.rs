use contracts::domain::common::ResourceKind;
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_global;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing screen after sign-in: a card per managed resource.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_global();

    view! {
        <PageFrame entity="admin" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(move || ctx.t(i18n::DASHBOARD).to_string())>
                {()}
            </PageHeader>

            <div class="page__content dashboard-grid">
                {ResourceKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let def = kind.def();
                        view! {
                            <A href=routes::list(kind) attr:class="dashboard-card">
                                <span class="dashboard-card__icon">{icon("folder-closed")}</span>
                                <span class="dashboard-card__title">{move || ctx.t(def.title)}</span>
                                {def.creatable.then(|| view! {
                                    <span class="dashboard-card__hint">"+ " {move || ctx.t(i18n::ADD)}</span>
                                })}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
