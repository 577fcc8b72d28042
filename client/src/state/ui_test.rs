use super::*;

#[test]
fn ui_state_default_has_menus_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(!state.user_menu_open);
}

#[test]
fn close_menus_resets_both_toggles() {
    let mut state = UiState { sidebar_open: true, user_menu_open: true };
    state.close_menus();
    assert_eq!(state, UiState::default());
}

#[test]
fn employer_navigation_lists_three_sections() {
    let labels: Vec<_> = nav_items(Role::Employer).iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Dashboard", "Managers", "Leads"]);
}

#[test]
fn manager_navigation_only_lists_own_leads() {
    assert_eq!(nav_items(Role::Manager), &[NavItem { label: "My Leads", href: "/manager/leads" }]);
}

#[test]
fn every_nav_item_stays_inside_role_subtree() {
    for role in [Role::Employer, Role::Manager] {
        for item in nav_items(role) {
            assert!(item.href.starts_with(role.route_prefix()), "{} escapes {role:?}", item.href);
        }
    }
}

#[test]
fn active_item_requires_exact_path() {
    assert!(is_active("/employer/leads", "/employer/leads"));
    assert!(is_active("/employer/leads/", "/employer/leads"));
    assert!(!is_active("/employer/dashboard", "/employer/leads"));
}

#[test]
fn page_title_follows_current_section() {
    assert_eq!(page_title(Role::Employer, "/employer/dashboard"), "Dashboard");
    assert_eq!(page_title(Role::Employer, "/employer/managers"), "Managers");
    assert_eq!(page_title(Role::Employer, "/employer/leads"), "Leads");
    assert_eq!(page_title(Role::Manager, "/manager/leads"), "My Leads");
    assert_eq!(page_title(Role::Employer, "/employer"), "Dashboard");
}
