//! Role-gated wrapper for a route subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the `employer` and `manager` parent routes in `app`. The access
//! decision itself lives in `util::guard`; this component re-evaluates it on
//! every session change or navigation against the session clock, so an
//! expired token redirects before the subtree ever renders. Redirects
//! replace the history entry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::net::types::Role;
use crate::util::guard::GuardOutcome;

/// Renders `children` only while the session is authenticated as `role`.
#[component]
pub fn ProtectedRoute(role: Role, children: ChildrenFn) -> impl IntoView {
    let manager = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = {
        let manager = manager.clone();
        Memo::new(move |_| {
            let path = location.pathname.get();
            let search = location.search.get();
            let search = search.trim_start_matches('?');
            let requested = if search.is_empty() { path } else { format!("{path}?{search}") };
            manager.access(Some(role), &requested)
        })
    };

    Effect::new(move || {
        if let GuardOutcome::Redirect(to) = outcome.get() {
            // Drop an expired token before leaving so `/login` sees a signed-out session.
            manager.revalidate();
            log::debug!("guard redirect to {to}");
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large full_page=true/> }
        >
            {children()}
        </Show>
    }
}
