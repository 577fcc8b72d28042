//! Toast queue for mutation outcomes and fetch failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<NotificationsState>` from the app root and rendered by
//! `components::notification_host`, which schedules auto-dismissal.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Queue a message; returns its id for later dismissal.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message: message.into() });
        id
    }

    /// Remove by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

pub fn notify_success(notifications: RwSignal<NotificationsState>, message: impl Into<String>) {
    let message = message.into();
    log::info!("{message}");
    notify(notifications, NotificationKind::Success, message);
}

pub fn notify_error(notifications: RwSignal<NotificationsState>, message: impl Into<String>) {
    let message = message.into();
    log::warn!("{message}");
    notify(notifications, NotificationKind::Error, message);
}

fn notify(notifications: RwSignal<NotificationsState>, kind: NotificationKind, message: String) {
    let mut id = 0;
    notifications.update(|n| id = n.push(kind, message));
    schedule_dismiss(notifications, id);
}

/// Drop the toast after `NOTIFICATION_TIMEOUT_MS` unless already dismissed.
fn schedule_dismiss(notifications: RwSignal<NotificationsState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::config::NOTIFICATION_TIMEOUT_MS).await;
        notifications.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (notifications, id);
}
