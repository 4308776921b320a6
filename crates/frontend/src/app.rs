use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::AppConfig;
use crate::shared::http::ApiClient;
use crate::system::auth::context::Session;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::restore();

    provide_context(config.clone());
    provide_context(AppGlobalContext::new());
    provide_context(session);
    // One client for the whole app so a rejected session redirects once
    provide_context(ApiClient::new(config, session));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
