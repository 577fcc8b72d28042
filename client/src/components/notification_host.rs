//! Stack of transient toasts in the top-right corner.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() role="alert">
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
