//! Authenticated shell: sidebar navigation, header, and user menu.
//!
//! DESIGN
//! ======
//! The navigation list is chosen by `Role` (see `state::ui::nav_items`), so an
//! employer never sees manager links and vice versa. The sidebar collapses to
//! a drawer on narrow screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::net::types::Role;
use crate::state::ui::{UiState, is_active, nav_items, page_title};

#[component]
pub fn Layout(role: Role, children: Children) -> impl IntoView {
    let manager = use_session();
    let session = manager.session();
    let ui = RwSignal::new(UiState::default());
    let location = use_location();
    let navigate = use_navigate();

    // Close the drawer and menu after any navigation.
    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::close_menus);
    });

    let user_name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let title = move || page_title(role, &location.pathname.get());

    let on_logout = move |_| {
        manager.logout();
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    let nav = nav_items(role)
        .iter()
        .map(|item| {
            let href = item.href;
            view! {
                <a href=href class="nav-link" class:nav-link--active=move || is_active(&location.pathname.get(), href)>
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="layout" class:layout--drawer-open=move || ui.get().sidebar_open>
            <div class="layout__overlay" on:click=move |_| ui.update(|u| u.sidebar_open = false)></div>
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <h1>"CRM System"</h1>
                    <button
                        class="btn sidebar__close"
                        on:click=move |_| ui.update(|u| u.sidebar_open = false)
                        aria-label="Close sidebar"
                    >
                        "✕"
                    </button>
                </div>
                <nav class="sidebar__nav">{nav}</nav>
                <div class="sidebar__user">
                    <span class="sidebar__user-name">{user_name}</span>
                    <span class="sidebar__user-role">{role.label()}</span>
                </div>
            </aside>

            <div class="layout__main">
                <header class="topbar">
                    <button
                        class="btn topbar__menu"
                        on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
                        aria-label="Open sidebar"
                    >
                        "☰"
                    </button>
                    <h1 class="topbar__title">{title}</h1>
                    <span class="topbar__spacer"></span>
                    <div class="user-menu">
                        <button
                            class="btn user-menu__toggle"
                            aria-haspopup="true"
                            aria-expanded=move || ui.get().user_menu_open.to_string()
                            on:click=move |_| ui.update(|u| u.user_menu_open = !u.user_menu_open)
                        >
                            <span class="user-menu__avatar" aria-hidden="true">"●"</span>
                            <span class="user-menu__name">{user_name}</span>
                            " ▾"
                        </button>
                        <div class="user-menu__dropdown" class:user-menu__dropdown--open=move || ui.get().user_menu_open role="menu">
                            <button class="user-menu__item" role="menuitem" on:click=on_logout>
                                "Sign out"
                            </button>
                        </div>
                    </div>
                </header>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
