use contracts::domain::common::{FieldKind, FieldSpec, Resource};
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::view_model::ResourceFormViewModel;
use crate::layout::global_context::use_global;
use crate::shared::components::file_input::FileInput;
use crate::shared::components::html_editor::HtmlEditor;
use crate::shared::components::localized_input::LocalizedInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::parent_select::ParentSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::resource_client::ResourceClient;

/// Create form when `id` is `None`, edit form otherwise.
#[component]
pub fn ResourceForm<T: Resource>(client: ResourceClient<T>, id: Option<i64>) -> impl IntoView {
    let ctx = use_global();
    let navigate = use_navigate();
    let vm = ResourceFormViewModel::new(client, id);
    let def = vm.def();
    vm.load_if_needed();

    Effect::new(move |_| {
        if let Some(path) = vm.saved_to.get() {
            navigate(&path, Default::default());
        }
    });

    let busy = Signal::derive(move || vm.saving.get() || vm.loading.get());
    let cancel_href = match id {
        Some(id) => routes::view(def.kind, id),
        None => routes::list(def.kind),
    };
    let back_href = cancel_href.clone();

    let title = Signal::derive(move || {
        let action = if vm.is_edit_mode() { i18n::EDIT } else { i18n::ADD };
        match id {
            Some(id) => format!("{}: {} #{}", ctx.t(action), ctx.t(def.title), id),
            None => format!("{}: {}", ctx.t(action), ctx.t(def.title)),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <PageFrame entity=def.path category=PAGE_CAT_FORM>
            <PageHeader title=title>
                <A href=back_href attr:class="button button--secondary">
                    {icon("arrow-left")}
                    " "
                    {move || ctx.t(i18n::BACK)}
                </A>
            </PageHeader>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{move || ctx.t(e)}</span>
                </div>
            })}

            <div class="page__content">
                <Show when=move || vm.loading.get()>
                    <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        {move || ctx.t(i18n::LOADING)}
                    </Flex>
                </Show>

                <form class="form" on:submit=on_submit>
                    {def
                        .form_fields()
                        .map(|field| field_editor(*field, vm, busy))
                        .collect_view()}

                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=move || busy.get()>
                            {icon("save")}
                            " "
                            {move || {
                                if vm.saving.get() {
                                    ctx.t(i18n::SAVING)
                                } else if vm.is_edit_mode() {
                                    ctx.t(i18n::SAVE)
                                } else {
                                    ctx.t(i18n::CREATE)
                                }
                            }}
                        </button>
                        <A href=cancel_href attr:class="button button--secondary">
                            {icon("cancel")}
                            " "
                            {move || ctx.t(i18n::CANCEL)}
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}

fn field_editor<T: Resource>(
    field: FieldSpec,
    vm: ResourceFormViewModel<T>,
    busy: Signal<bool>,
) -> AnyView {
    let ctx = use_global();
    let draft = vm.draft;

    if field.localized {
        return view! { <LocalizedInput field=field draft=draft disabled=busy /> }.into_any();
    }

    let key = field.key;
    let input_id = format!("field-{}", key);
    let value = Signal::derive(move || draft.with(|d| d.get(key).to_string()));
    let set = Callback::new(move |v: String| draft.update(|d| d.set(key, v)));
    let label = Signal::derive(move || ctx.t(field.label).to_string());

    match field.kind {
        FieldKind::Image | FieldKind::Document => view! {
            <FileInput field=field current=value file=vm.file disabled=busy />
        }
        .into_any(),
        FieldKind::ForeignKey(parent) => view! {
            <ParentSelect field=field parent=parent draft=draft disabled=busy />
        }
        .into_any(),
        FieldKind::Html => view! {
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>
                    {move || label.get()}
                    {field.required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
                <HtmlEditor value=value on_change=set id=input_id required=field.required disabled=busy />
            </div>
        }
        .into_any(),
        FieldKind::Iframe => view! {
            <Textarea
                id=input_id
                label=label
                value=value
                on_input=set
                required=field.required
                disabled=busy
                rows=4
                monospace=true
            />
        }
        .into_any(),
        FieldKind::Email => view! {
            <Input
                id=input_id
                label=label
                value=value
                on_input=set
                input_type="email"
                required=field.required
                disabled=busy
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Timestamp => view! {
            <Input
                id=input_id
                label=label
                value=value
                on_input=set
                required=field.required
                disabled=busy
            />
        }
        .into_any(),
    }
}
