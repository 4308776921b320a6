use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use contracts::shared::urls::routes;

use super::context::use_session;

/// Performs navigation requested by the session (sign-out, rejected token).
///
/// Must live inside the `Router`.
#[component]
pub fn AuthRedirect() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(path) = session.pending_redirect() {
            session.clear_redirect();
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}

/// Renders children only for a signed-in user, otherwise sends them to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if !session.is_signed_in() {
            session.redirect_to(routes::LOGIN);
        }
    });

    view! {
        <Show when=move || session.is_signed_in() fallback=|| ()>
            {children()}
        </Show>
    }
}
