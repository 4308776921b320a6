//! Collapsible per-tour sections for child resources (itinerary, includes).

use contracts::domain::common::{HasParent, Resource, ResourceDef};
use contracts::shared::api_error::Operation;
use contracts::shared::delete_guard::DeleteGuard;
use contracts::shared::grouping::{group_by_key, ExpandState};
use contracts::shared::i18n;
use contracts::shared::list_view::{group_caption, parent_titles, remove_by_id};
use contracts::shared::urls::{api_path, routes};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde_json::Value;
use thaw::*;

use crate::domain::resource::ui::list::{ErrorBanner, ResourceRow};
use crate::layout::global_context::use_global;
use crate::shared::components::delete_confirm::DeleteConfirm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_client::ResourceClient;

#[component]
pub fn GroupedResourceList<T: Resource + HasParent>(client: ResourceClient<T>) -> impl IntoView {
    let ctx = use_global();
    let def: &'static ResourceDef = T::def();
    let parent = def.parent_field();
    let client = StoredValue::new(client);

    let (items, set_items) = signal(Vec::<T>::new());
    let parents = RwSignal::new(Vec::<Value>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<Operation>);
    let expanded = RwSignal::new(ExpandState::<Option<i64>>::default());
    let guard = RwSignal::new(DeleteGuard::default());

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match client.list().await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("failed to load {}: {}", def.path, e);
                    if !e.requires_login() {
                        set_error.set(Some(Operation::Load));
                    }
                }
            }

            // group headers fall back to "<Tour> #id" without parent titles
            if let Some((_, kind)) = parent {
                match client.api().get_list::<Value>(&api_path(kind, None)).await {
                    Ok(rows) => parents.set(rows),
                    Err(e) => log::warn!("parent titles for {} unavailable: {}", def.path, e),
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_delete = Callback::new(move |id: i64| {
        let client = client.get_value();
        spawn_local(async move {
            match client.delete(id).await {
                Ok(()) => {
                    log::info!("deleted {} #{}", def.path, id);
                    set_items.update(|rows| {
                        remove_by_id(rows, id);
                    });
                }
                Err(e) => {
                    log::error!("failed to delete {} #{}: {}", def.path, id, e);
                    if !e.requires_login() {
                        set_error.set(Some(Operation::Delete));
                    }
                }
            }
            guard.update(|g| g.finish());
        });
    });

    let parent_key = parent.map(|(field, _)| field.key);
    let parent_label = parent.map(|(field, _)| field.label).unwrap_or(def.title);

    let groups = move || {
        let lang = ctx.lang.get();
        let titles = match parent {
            Some((_, kind)) => parents.with(|rows| parent_titles(kind.def(), rows, lang)),
            None => Default::default(),
        };
        group_by_key(items.get(), |row: &T| row.parent_id())
            .into_iter()
            .map(|group| {
                let caption = group_caption(group.key, &titles, parent_label, lang);
                (group, caption)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame entity=def.path category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || ctx.t(def.title).to_string())>
                <Space>
                    {def.creatable.then(|| view! {
                        <A href=routes::add(def.kind) attr:class="button button--primary">
                            {icon("plus")}
                            " "
                            {move || ctx.t(i18n::ADD)}
                        </A>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                        " "
                        {move || ctx.t(i18n::REFRESH)}
                    </Button>
                </Space>
            </PageHeader>

            <ErrorBanner error=error />

            <div class="page__content">
                {move || {
                    if loading.get() && items.with(|i| i.is_empty()) {
                        return view! {
                            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                <Spinner />
                                {move || ctx.t(i18n::LOADING)}
                            </Flex>
                        }
                        .into_any();
                    }

                    let groups = groups();
                    if groups.is_empty() {
                        return view! {
                            <div class="groups__empty text-muted">{move || ctx.t(i18n::NO_DATA)}</div>
                        }
                        .into_any();
                    }

                    groups
                        .into_iter()
                        .map(|(group, caption)| {
                            let key = group.key;
                            let count = group.items.len();
                            let is_open = move || expanded.with(|e| e.is_open(&key));

                            view! {
                                <section class="group">
                                    <button
                                        class="group__header"
                                        class:group__header--open=is_open
                                        on:click=move |_| expanded.update(|e| e.toggle(key))
                                    >
                                        {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                        <span class="group__title">{caption}</span>
                                        <span class="group__count">{count}</span>
                                    </button>
                                    {move || is_open().then(|| {
                                        let rows = group.items.clone();
                                        view! {
                                            <Table>
                                                <TableBody>
                                                    {rows
                                                        .into_iter()
                                                        .map(|item| view! {
                                                            <ResourceRow item=item guard=guard skip_key=parent_key />
                                                        })
                                                        .collect_view()}
                                                </TableBody>
                                            </Table>
                                        }
                                    })}
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <DeleteConfirm guard=guard on_confirm=on_delete />
        </PageFrame>
    }
}
