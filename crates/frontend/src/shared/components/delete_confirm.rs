use contracts::shared::delete_guard::DeleteGuard;
use contracts::shared::i18n;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::use_global;
use crate::shared::modal::Modal;

/// Confirmation dialog for the pending delete in `guard`.
///
/// `on_confirm` receives the id once per confirmation; the caller runs the
/// DELETE and calls `DeleteGuard::finish` when it completes.
#[component]
pub fn DeleteConfirm(guard: RwSignal<DeleteGuard>, on_confirm: Callback<i64>) -> impl IntoView {
    let ctx = use_global();

    let is_deleting = Signal::derive(move || guard.with(|g| g.is_deleting()));
    let close = Callback::new(move |_| guard.update(|g| g.cancel()));
    let confirm = move |_| {
        if let Some(id) = guard.try_update(|g| g.begin()).flatten() {
            on_confirm.run(id);
        }
    };

    view! {
        <Show when=move || guard.with(|g| g.is_open())>
            <Modal
                title=Signal::derive(move || ctx.t(i18n::CONFIRM_DELETE_TITLE).to_string())
                on_close=close
            >
                <p>
                    {move || ctx.t(i18n::CONFIRM_DELETE_TEXT)}
                    {move || guard.with(|g| g.pending()).map(|id| format!(" (#{})", id))}
                </p>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_deleting
                        on_click=move |_| close.run(())
                    >
                        {move || ctx.t(i18n::CANCEL)}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_deleting
                        on_click=confirm
                    >
                        {move || {
                            if is_deleting.get() {
                                ctx.t(i18n::DELETING)
                            } else {
                                ctx.t(i18n::DELETE)
                            }
                        }}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
