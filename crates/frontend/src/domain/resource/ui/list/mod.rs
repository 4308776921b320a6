use contracts::domain::common::{Resource, ResourceDef, ResourceKind};
use contracts::shared::api_error::Operation;
use contracts::shared::delete_guard::DeleteGuard;
use contracts::shared::i18n;
use contracts::shared::list_view::{remove_by_id, rows_or_placeholder, ListRow};
use contracts::shared::urls::routes;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::layout::global_context::use_global;
use crate::shared::components::delete_confirm::DeleteConfirm;
use crate::shared::components::field_value::ListCell;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_client::ResourceClient;

/// Table of every record of one resource.
#[component]
pub fn ResourceList<T: Resource>(client: ResourceClient<T>) -> impl IntoView {
    let ctx = use_global();
    let def: &'static ResourceDef = T::def();
    let client = StoredValue::new(client);

    let (items, set_items) = signal(Vec::<T>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<Operation>);
    let guard = RwSignal::new(DeleteGuard::default());

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match client.list().await {
                Ok(rows) => {
                    log::debug!("loaded {} {}", rows.len(), def.path);
                    set_items.set(rows);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", def.path, e);
                    if !e.requires_login() {
                        set_error.set(Some(Operation::Load));
                    }
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
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

    // id + listed fields + actions
    let colspan = (def.list_fields().count() + 2).to_string();

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
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 80px;">"ID"</TableHeaderCell>
                            {def
                                .list_fields()
                                .map(|field| {
                                    let label = field.label;
                                    view! { <TableHeaderCell>{move || ctx.t(label)}</TableHeaderCell> }
                                })
                                .collect_view()}
                            <TableHeaderCell attr:style="width: 160px; text-align: center;">
                                {move || ctx.t(i18n::ACTIONS)}
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let colspan = colspan.clone();
                            if loading.get() && items.with(|i| i.is_empty()) {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=colspan.clone() attr:style="padding: 40px; text-align: center;">
                                            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                                <Spinner />
                                                {move || ctx.t(i18n::LOADING)}
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            rows_or_placeholder(items.get())
                                .into_iter()
                                .map(|row| match row {
                                    ListRow::Placeholder => {
                                        let colspan = colspan.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell attr:colspan=colspan attr:style="padding: 40px; text-align: center;">
                                                    <span class="text-muted">{move || ctx.t(i18n::NO_DATA)}</span>
                                                </TableCell>
                                            </TableRow>
                                        }
                                        .into_any()
                                    }
                                    ListRow::Item(item) => view! { <ResourceRow item=item guard=guard /> }.into_any(),
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <DeleteConfirm guard=guard on_confirm=on_delete />
        </PageFrame>
    }
}

/// One table row: id, listed fields and the row actions.
#[component]
pub fn ResourceRow<T: Resource>(
    item: T,
    guard: RwSignal<DeleteGuard>,
    /// Field left out of the row, e.g. the key a group is already keyed by
    #[prop(default = None)]
    skip_key: Option<&'static str>,
) -> impl IntoView {
    let def = T::def();
    let id = item.id();
    let record = serde_json::to_value(&item).unwrap_or_default();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{id}</TableCellLayout>
            </TableCell>
            {def
                .list_fields()
                .filter(|field| Some(field.key) != skip_key)
                .map(|field| {
                    let record = record.clone();
                    view! {
                        <TableCell>
                            <TableCellLayout>
                                <ListCell field=*field record=record.clone() />
                            </TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()}
            <TableCell>
                <TableCellLayout>
                    <RowActions kind=def.kind id=id editable=def.editable guard=guard />
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

/// View / edit links and the delete button of a row.
#[component]
pub fn RowActions(
    kind: ResourceKind,
    id: i64,
    editable: bool,
    guard: RwSignal<DeleteGuard>,
) -> impl IntoView {
    let ctx = use_global();

    view! {
        <div class="row-actions">
            <A href=routes::view(kind, id) attr:class="button button--ghost" attr:title=move || ctx.t(i18n::VIEW)>
                {icon("eye")}
            </A>
            {editable.then(|| view! {
                <A href=routes::edit(kind, id) attr:class="button button--ghost" attr:title=move || ctx.t(i18n::EDIT)>
                    {icon("edit")}
                </A>
            })}
            <Button
                appearance=ButtonAppearance::Transparent
                disabled=Signal::derive(move || guard.with(|g| g.is_deleting()))
                on_click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    guard.update(|g| g.request(id));
                }
            >
                {icon("delete")}
            </Button>
        </div>
    }
}

/// Generic localized failure message; details go to the log.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<Operation>>) -> impl IntoView {
    let ctx = use_global();

    move || {
        error.get().map(|op| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{move || ctx.t(i18n::error_for(op))}</span>
                </div>
            }
        })
    }
}
