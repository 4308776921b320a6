//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title (links to the dashboard)
//! - UI language switcher
//! - Sign out

use contracts::domain::common::Lang;
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_global;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global();
    let session = use_session();

    let logout = move |_| session.sign_out();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href=routes::DASHBOARD attr:class="top-header__title">
                    {move || ctx.t(i18n::CONSOLE_TITLE)}
                </A>
            </div>

            <div class="top-header__actions">
                <div class="top-header__langs">
                    {Lang::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <button
                                    class="top-header__lang-btn"
                                    class:top-header__lang-btn--active=move || ctx.lang.get() == lang
                                    title=lang.native_name()
                                    on:click=move |_| ctx.set_lang(lang)
                                >
                                    {lang.tag()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title=move || ctx.t(i18n::SIGN_OUT)
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
