use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use super::dispatch::{ResourceScreen, Screen};
use crate::layout::Shell;
use crate::system::auth::guard::{AuthRedirect, RequireAuth};
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;

/// Signed-in screen inside the shell.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireAuth>
            {
                let children = children.clone();
                view! { <Shell>{children()}</Shell> }
            }
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AuthRedirect />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route
                    path=path!("/admin")
                    view=|| view! { <Protected><DashboardPage /></Protected> }
                />
                <Route
                    path=path!("/admin/:resource")
                    view=|| view! { <Protected><ResourceScreen screen=Screen::List /></Protected> }
                />
                <Route
                    path=path!("/admin/:resource/add")
                    view=|| view! { <Protected><ResourceScreen screen=Screen::Add /></Protected> }
                />
                <Route
                    path=path!("/admin/:resource/view/:id")
                    view=|| view! { <Protected><ResourceScreen screen=Screen::View /></Protected> }
                />
                <Route
                    path=path!("/admin/:resource/edit/:id")
                    view=|| view! { <Protected><ResourceScreen screen=Screen::Edit /></Protected> }
                />
            </Routes>
        </Router>
    }
}
