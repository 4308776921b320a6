use contracts::domain::common::{Lang, Tr};
use contracts::shared::api_error::Operation;
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::global_context::use_global;
use crate::shared::components::ui::Input;
use crate::shared::http::use_api;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global();
    let client = use_api();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<Tr>::None);
    let (is_loading, set_is_loading) = signal(false);

    // a stored token skips the form; a fresh sign-in lands here too
    {
        let session = client.session();
        Effect::new(move |_| {
            if session.is_signed_in() {
                navigate(
                    routes::DASHBOARD,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            set_error.set(Some(i18n::ERROR_REQUIRED));
            return;
        }

        set_is_loading.set(true);
        set_error.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::login(client.config(), username_val, password_val).await {
                Ok(response) => {
                    log::info!("signed in");
                    client.signed_in(response.token);
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    set_error.set(Some(i18n::error_for(Operation::Login)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{move || ctx.t(i18n::CONSOLE_TITLE)}</h1>

                <div class="login-box__langs">
                    {Lang::ALL
                        .into_iter()
                        .map(|lang| view! {
                            <button
                                type="button"
                                class="top-header__lang-btn"
                                class:top-header__lang-btn--active=move || ctx.lang.get() == lang
                                on:click=move |_| ctx.set_lang(lang)
                            >
                                {lang.tag()}
                            </button>
                        })
                        .collect_view()}
                </div>

                {move || error.get().map(|e| view! {
                    <div class="error-message">{move || ctx.t(e)}</div>
                })}

                <form on:submit=on_submit>
                    <Input
                        id="username"
                        label=Signal::derive(move || ctx.t(i18n::USERNAME).to_string())
                        value=username
                        on_input=Callback::new(move |v: String| set_username.set(v))
                        autocomplete="username"
                        required=true
                        disabled=is_loading
                    />
                    <Input
                        id="password"
                        input_type="password"
                        label=Signal::derive(move || ctx.t(i18n::PASSWORD).to_string())
                        value=password
                        on_input=Callback::new(move |v: String| set_password.set(v))
                        autocomplete="current-password"
                        required=true
                        disabled=is_loading
                    />

                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || {
                            if is_loading.get() {
                                ctx.t(i18n::LOADING)
                            } else {
                                ctx.t(i18n::SIGN_IN)
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
