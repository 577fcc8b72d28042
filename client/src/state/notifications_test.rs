use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "Manager created successfully");
    let b = state.push(NotificationKind::Error, "Failed to fetch leads");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, NotificationKind::Error);
}

#[test]
fn dismiss_removes_only_matching_entry() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "one");
    let b = state.push(NotificationKind::Success, "two");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), [b]);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Error, "x");
    state.dismiss(a);
    assert_ne!(state.push(NotificationKind::Error, "y"), a);
}

#[test]
fn notify_helpers_queue_by_kind() {
    let owner = Owner::new();
    owner.with(|| {
        let notifications = RwSignal::new(NotificationsState::default());
        notify_error(notifications, "Failed to fetch leads");
        notify_success(notifications, "Lead updated successfully");
        let kinds: Vec<_> = notifications.get_untracked().items.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, [NotificationKind::Error, NotificationKind::Success]);
    });
}
