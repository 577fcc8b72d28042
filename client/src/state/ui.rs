//! Layout chrome state and role-specific navigation.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (sidebar, user menu) out of the
//! session and list state so the layout can evolve independently of data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::Role;

/// Shell toggles owned by `components::layout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile sidebar drawer visibility.
    pub sidebar_open: bool,
    pub user_menu_open: bool,
}

impl UiState {
    /// Reset transient menus after navigation.
    pub fn close_menus(&mut self) {
        self.sidebar_open = false;
        self.user_menu_open = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Employer => &[
            NavItem { label: "Dashboard", href: "/employer/dashboard" },
            NavItem { label: "Managers", href: "/employer/managers" },
            NavItem { label: "Leads", href: "/employer/leads" },
        ],
        Role::Manager => &[NavItem { label: "My Leads", href: "/manager/leads" }],
    }
}

/// Exact-path match, as the sidebar highlights only the current page.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path.trim_end_matches('/') == href
}

/// Header title for the page at `path`.
pub fn page_title(role: Role, path: &str) -> &'static str {
    let items = nav_items(role);
    items
        .iter()
        .find(|item| path.starts_with(item.href))
        .or_else(|| items.first())
        .map_or("", |item| item.label)
}
