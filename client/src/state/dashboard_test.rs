use super::*;
use crate::net::types::StatChanges;

#[test]
fn change_is_always_signed() {
    assert_eq!(format_change(12), "+12%");
    assert_eq!(format_change(-3), "-3%");
    assert_eq!(format_change(0), "+0%");
}

#[test]
fn cards_follow_fixed_order_with_changes() {
    let stats = DashboardStats {
        in_progress: 24,
        completed: 18,
        canceled: 5,
        total_managers: 6,
        changes: StatChanges { in_progress: 12, completed: 8, canceled: -3, total_managers: 2 },
    };
    let cards = stat_cards(&stats);
    let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Leads in Progress", "Leads Completed", "Leads Canceled", "Total Managers"]);
    assert_eq!(cards[2].value, 5);
    assert_eq!(cards[2].change_label(), "-3%");
    assert!(!cards[2].is_rising());
    assert!(cards[3].is_rising());
}

#[test]
fn default_state_has_no_stats() {
    let state = DashboardState::default();
    assert!(state.stats.is_none());
    assert!(state.error.is_none());
}
