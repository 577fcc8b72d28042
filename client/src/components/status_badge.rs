//! Colored pill for a lead's pipeline stage.

use leptos::prelude::*;

use crate::net::types::LeadStatus;

#[component]
pub fn StatusBadge(status: LeadStatus) -> impl IntoView {
    let icon = match status {
        LeadStatus::Pending | LeadStatus::InProgress => "◷",
        LeadStatus::Completed => "✓",
        LeadStatus::Canceled => "⊘",
    };
    view! {
        <span class=format!("badge {}", status.badge_class())>
            <span class="badge__icon" aria-hidden="true">{icon}</span>
            {status.label()}
        </span>
    }
}
