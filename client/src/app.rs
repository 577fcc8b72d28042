//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::notification_host::NotificationHost;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::pages::employer::{dashboard::EmployerDashboardPage, leads::EmployerLeadsPage, managers::ManagersPage};
use crate::pages::login::LoginPage;
use crate::pages::manager::leads::ManagerLeadsPage;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionManager;
use crate::util::clock::SystemClock;
use crate::util::token_store::LocalTokenStore;

/// The session manager wired to browser storage, the REST API, and wall time.
pub type AppSession = SessionManager<LocalTokenStore, ApiClient, SystemClock>;

/// Session manager provided by `App`.
pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and notification queue, starts session restoration, and
/// mounts the role-guarded route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession = SessionManager::new(LocalTokenStore::default(), ApiClient::from_config(), SystemClock);
    provide_context(session.clone());
    provide_context(RwSignal::new(NotificationsState::default()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/crm.css"/>
        <Title text="CRM System"/>

        <Router>
            <NotificationHost/>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("employer") view=EmployerArea>
                    <Route path=StaticSegment("dashboard") view=EmployerDashboardPage/>
                    <Route path=StaticSegment("managers") view=ManagersPage/>
                    <Route path=StaticSegment("leads") view=EmployerLeadsPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("manager") view=ManagerArea>
                    <Route path=StaticSegment("leads") view=ManagerLeadsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn EmployerArea() -> impl IntoView {
    view! {
        <ProtectedRoute role=Role::Employer>
            <Layout role=Role::Employer>
                <Outlet/>
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn ManagerArea() -> impl IntoView {
    view! {
        <ProtectedRoute role=Role::Manager>
            <Layout role=Role::Manager>
                <Outlet/>
            </Layout>
        </ProtectedRoute>
    }
}
