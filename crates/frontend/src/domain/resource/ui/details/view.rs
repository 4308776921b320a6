use contracts::domain::common::{Resource, ResourceDef};
use contracts::shared::api_error::Operation;
use contracts::shared::delete_guard::DeleteGuard;
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use serde_json::Value;
use thaw::*;

use crate::domain::resource::ui::list::ErrorBanner;
use crate::layout::global_context::use_global;
use crate::shared::components::delete_confirm::DeleteConfirm;
use crate::shared::components::field_value::FieldValue;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource_client::ResourceClient;

#[component]
pub fn ResourceView<T: Resource>(client: ResourceClient<T>, id: i64) -> impl IntoView {
    let ctx = use_global();
    let def: &'static ResourceDef = T::def();
    let navigate = use_navigate();
    let client = StoredValue::new(client);

    let record = RwSignal::new(None::<Value>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<Operation>);
    let menu_open = RwSignal::new(false);
    let guard = RwSignal::new(DeleteGuard::default());

    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            match client.get(id).await {
                Ok(item) => match serde_json::to_value(&item) {
                    Ok(json) => record.set(Some(json)),
                    Err(e) => {
                        log::error!("{} #{} is not a JSON object: {}", def.path, id, e);
                        set_error.set(Some(Operation::Load));
                    }
                },
                Err(e) => {
                    log::error!("failed to load {} #{}: {}", def.path, id, e);
                    if !e.requires_login() {
                        set_error.set(Some(Operation::Load));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    // set once the record is gone; the page then returns to the list
    let deleted = RwSignal::new(false);
    Effect::new(move |_| {
        if deleted.get() {
            navigate(&routes::list(def.kind), Default::default());
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        let client = client.get_value();
        spawn_local(async move {
            let result = client.delete(id).await;
            guard.update(|g| g.finish());
            match result {
                Ok(()) => {
                    log::info!("deleted {} #{}", def.path, id);
                    deleted.set(true);
                }
                Err(e) => {
                    log::error!("failed to delete {} #{}: {}", def.path, id, e);
                    if !e.requires_login() {
                        set_error.set(Some(Operation::Delete));
                    }
                }
            }
        });
    });

    let title = Signal::derive(move || format!("{} #{}", ctx.t(def.title), id));

    view! {
        <PageFrame entity=def.path category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Space>
                    <A href=routes::list(def.kind) attr:class="button button--secondary">
                        {icon("arrow-left")}
                        " "
                        {move || ctx.t(i18n::BACK)}
                    </A>
                    <div class="actions-dropdown">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {icon("more")}
                            " "
                            {move || ctx.t(i18n::ACTIONS)}
                        </Button>
                        <Show when=move || menu_open.get()>
                            <div class="actions-dropdown__menu" on:click=move |_| menu_open.set(false)>
                                {def.editable.then(|| view! {
                                    <A href=routes::edit(def.kind, id) attr:class="actions-dropdown__item">
                                        {icon("edit")}
                                        " "
                                        {move || ctx.t(i18n::EDIT)}
                                    </A>
                                })}
                                <button
                                    class="actions-dropdown__item actions-dropdown__item--danger"
                                    on:click=move |_| guard.update(|g| g.request(id))
                                >
                                    {icon("delete")}
                                    " "
                                    {move || ctx.t(i18n::DELETE)}
                                </button>
                            </div>
                        </Show>
                    </div>
                </Space>
            </PageHeader>

            <ErrorBanner error=error />

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=move || view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            {move || ctx.t(i18n::LOADING)}
                        </Flex>
                    }
                >
                    {move || record.get().map(|json| {
                        view! {
                            <dl class="details-list">
                                {def
                                    .fields
                                    .iter()
                                    .map(|field| {
                                        let label = field.label;
                                        view! {
                                            <dt class="details-list__label">{move || ctx.t(label)}</dt>
                                            <dd class="details-list__value">
                                                <FieldValue field=*field record=json.clone() />
                                            </dd>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        }
                    })}
                </Show>
            </div>

            <DeleteConfirm guard=guard on_confirm=on_delete />
        </PageFrame>
    }
}
